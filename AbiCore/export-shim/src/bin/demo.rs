//! Native entry routine: call `maxofthree` directly and through the export
//! shim, and run the inline register add.
//!
//! Output is illustrative only. Set `RUST_LOG=debug` for diagnostics.

use log::{debug, info};

use maxthree_asm::{add_three, max_of_three, AsmRoutine, MaxRoutine};
use maxthree_export::{CallAsmMaxOfThree, GetAnswerOfLife};
use maxthree_primitives::{widen, MAX_OF_THREE_SYMBOL};

fn main() {
    env_logger::init();

    info!("{} implementation: {}", MAX_OF_THREE_SYMBOL, AsmRoutine.name());

    let x: i32 = 2 * 3 + 1;
    let y: i32 = 10 - 4;
    debug!("operands x={} y={}", x, y);

    println!("{}(1, 2, 3) = {}", MAX_OF_THREE_SYMBOL, max_of_three(1, 2, 3));
    println!("{}(150, 12, 11) = {}", MAX_OF_THREE_SYMBOL, max_of_three(150, 12, 11));

    let sum = add_three(1, 2, widen(x));
    println!("inline add 1 + 2 + {} = {}", x, sum);

    println!("GetAnswerOfLife() = {}", GetAnswerOfLife());
    println!(
        "CallAsmMaxOfThree({}, {}, {}) = {}",
        x,
        y,
        -x,
        CallAsmMaxOfThree(x, y, -x)
    );
}
