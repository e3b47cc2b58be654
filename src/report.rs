use crate::stats::HandStat;
use std::io::{self, Write};

/// One listing line, e.g. `("Pair", 0.5)`.
pub fn report_line(hand: &HandStat) -> String {
    hand.to_string()
}

/// Write every hand on its own line, in the order given.
pub fn write_report<W: Write>(out: &mut W, hands: &[HandStat]) -> io::Result<()> {
    for hand in hands {
        writeln!(out, "{}", report_line(hand))?;
    }
    out.flush()
}
