// SPDX-License-Identifier: MIT

pub mod classifier;
pub mod executor;
pub mod git;
pub mod message;
pub mod planner;
