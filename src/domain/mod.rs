// SPDX-License-Identifier: MIT

mod change;
mod commit;

pub use change::*;
pub use commit::*;
