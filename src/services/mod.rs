pub mod explanation;
pub mod flow;
pub mod quiz;
pub mod recommendations;
pub mod session;

pub use flow::{AppFlow, FlowSnapshot, Screen, Theme};
pub use recommendations::{recommend, recommend_with, trending, ScoringWeights};
