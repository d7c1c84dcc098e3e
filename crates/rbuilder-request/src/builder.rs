use rbuilder_core::{Block, BlockBuilder};

use crate::parameter::Parameter;

/// Reduction rules for request blocks.
///
/// One parameter passes through unchanged, several are grouped in a
/// [`Parameter::Combined`] in source order, and none yield
/// [`Parameter::Empty`].
#[derive(Debug, Clone, Copy)]
pub struct RequestBuilder;

/// A block of request parameters.
pub type RequestBlock = Block<RequestBuilder>;

impl BlockBuilder for RequestBuilder {
    type Component = Parameter;

    fn build_block(mut components: Vec<Parameter>) -> Parameter {
        match components.len() {
            0 => Parameter::Empty,
            1 => components.pop().unwrap_or_default(),
            _ => Parameter::Combined(components),
        }
    }

    fn build_optional(component: Option<Parameter>) -> Parameter {
        component.unwrap_or_default()
    }

    fn build_array(components: Vec<Parameter>) -> Parameter {
        Parameter::Combined(components)
    }
}
