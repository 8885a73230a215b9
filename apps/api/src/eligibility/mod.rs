// Eligibility rule engine and its HTTP surface.
// All criteria checks go through evaluator::evaluate; handlers and other
// modules never re-implement the rules.

pub mod evaluator;
pub mod handlers;
