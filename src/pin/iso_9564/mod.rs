mod format_0;
mod format_3;
mod format_4;

pub use format_0::*;
pub use format_3::*;
pub use format_4::*;

#[cfg(test)]
mod tests;
