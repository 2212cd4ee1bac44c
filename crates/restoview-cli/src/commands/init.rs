//! Schema bootstrap command
//!
//! Usage: restoview init

use super::{CmdResult, Context};

pub fn execute(ctx: &Context) -> CmdResult {
    ctx.open()?;
    println!("✓ Store ready at {}", ctx.config.path.display());
    Ok(())
}
