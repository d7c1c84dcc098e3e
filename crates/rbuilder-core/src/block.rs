use std::fmt;

use crate::{BlockBuilder, Branch};

/// A block being written: the ordered list of sibling components that
/// [`BlockBuilder::build_block`] will fold.
///
/// Plain Rust control flow works inside a block (a skipped `push` contributes
/// nothing). The `push_optional`, `push_either` and `push_each` helpers route
/// through the family's reduction rules instead, so the folded value is the
/// same as the one the family's identity and concatenation rules prescribe.
pub struct Block<B: BlockBuilder> {
    components: Vec<B::Component>,
}

impl<B: BlockBuilder> Block<B> {
    /// An empty block.
    #[must_use]
    pub fn new() -> Self {
        Self {
            components: Vec::new(),
        }
    }

    /// Run `body` against a fresh block and fold the result.
    pub fn build(body: impl FnOnce(&mut Self)) -> B::Component {
        let mut block = Self::new();
        body(&mut block);
        block.finish()
    }

    /// Append one component.
    pub fn push(&mut self, component: impl Into<B::Component>) -> &mut Self {
        self.components.push(component.into());
        self
    }

    /// Append an `if` without `else`.
    pub fn push_optional<C: Into<B::Component>>(&mut self, component: Option<C>) -> &mut Self {
        let folded = B::build_optional(component.map(Into::into));
        self.components.push(folded);
        self
    }

    /// Append `component()` only when `condition` holds.
    pub fn push_if<C: Into<B::Component>>(
        &mut self,
        condition: bool,
        component: impl FnOnce() -> C,
    ) -> &mut Self {
        self.push_optional(condition.then(component))
    }

    /// Append the taken arm of an `if/else` or `match`.
    pub fn push_either<L, R>(&mut self, branch: Branch<L, R>) -> &mut Self
    where
        L: Into<B::Component>,
        R: Into<B::Component>,
    {
        let folded = B::build_either(branch.map(Into::into, Into::into));
        self.components.push(folded);
        self
    }

    /// Append a loop whose body is itself a block.
    ///
    /// Each iteration is folded with `build_block`, then the iterations are
    /// folded with `build_array`.
    pub fn push_each<I, F>(&mut self, items: I, mut body: F) -> &mut Self
    where
        I: IntoIterator,
        F: FnMut(&mut Block<B>, I::Item),
    {
        let iterations = items
            .into_iter()
            .map(|item| {
                let mut inner = Block::<B>::new();
                body(&mut inner, item);
                inner.finish()
            })
            .collect();
        self.components.push(B::build_array(iterations));
        self
    }

    /// Append a loop that produces one component per item.
    pub fn extend<I>(&mut self, components: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<B::Component>,
    {
        let items = components.into_iter().map(Into::into).collect();
        self.components.push(B::build_array(items));
        self
    }

    /// Append a nested block, folded on its own before joining this one.
    pub fn push_block(&mut self, body: impl FnOnce(&mut Block<B>)) -> &mut Self {
        let nested = Block::<B>::build(body);
        self.components.push(nested);
        self
    }

    /// Number of sibling components written so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// `true` if nothing has been written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Fold the block with [`BlockBuilder::build_block`].
    pub fn finish(self) -> B::Component {
        B::build_block(self.components)
    }
}

impl<B: BlockBuilder> Default for Block<B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B> fmt::Debug for Block<B>
where
    B: BlockBuilder,
    B::Component: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Block")
            .field("components", &self.components)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Concatenates strings; the empty string is the identity.
    struct Concat;

    impl BlockBuilder for Concat {
        type Component = String;

        fn build_block(components: Vec<String>) -> String {
            components.concat()
        }

        fn build_optional(component: Option<String>) -> String {
            component.unwrap_or_default()
        }
    }

    #[test]
    fn push_keeps_source_order() {
        let out = Block::<Concat>::build(|b| {
            b.push("a").push("b").push("c");
        });
        assert_eq!(out, "abc");
    }

    #[test]
    fn false_optional_matches_omitted_statement() {
        let with_if = Block::<Concat>::build(|b| {
            b.push("x");
            b.push_if(false, || "never");
            b.push("y");
        });
        let without = Block::<Concat>::build(|b| {
            b.push("x").push("y");
        });
        assert_eq!(with_if, without);
    }

    #[test]
    fn true_optional_matches_direct_statement() {
        let with_if = Block::<Concat>::build(|b| {
            b.push_optional(Some("z"));
        });
        assert_eq!(with_if, Block::<Concat>::build(|b| {
            b.push("z");
        }));
    }

    #[test]
    fn either_picks_taken_arm() {
        let out = Block::<Concat>::build(|b| {
            b.push_either(Branch::<&str, String>::Second("else".to_string()));
        });
        assert_eq!(out, "else");
    }

    #[test]
    fn push_each_runs_a_block_per_iteration() {
        let out = Block::<Concat>::build(|b| {
            b.push_each(1..=3, |inner, n| {
                inner.push(n.to_string());
                inner.push(",");
            });
        });
        assert_eq!(out, "1,2,3,");
    }

    #[test]
    fn nested_block_is_folded_in_place() {
        let out = Block::<Concat>::build(|b| {
            b.push("<");
            b.push_block(|inner| {
                inner.push("mid");
            });
            b.push(">");
        });
        assert_eq!(out, "<mid>");
    }

    #[test]
    fn len_tracks_top_level_statements() {
        let mut block = Block::<Concat>::new();
        assert!(block.is_empty());
        block.push("a").extend(["b", "c"]);
        assert_eq!(block.len(), 2);
    }

    proptest! {
        #[test]
        fn empty_loop_matches_empty_block(prefix in "[a-z]{0,8}") {
            let looped = Block::<Concat>::build(|b| {
                b.push(prefix.clone());
                b.extend(Vec::<String>::new());
            });
            prop_assert_eq!(looped, prefix);
        }

        #[test]
        fn extend_preserves_iteration_order(items in prop::collection::vec("[a-z]{1,4}", 0..16)) {
            let out = Block::<Concat>::build(|b| {
                b.extend(items.clone());
            });
            prop_assert_eq!(out, items.concat());
        }
    }
}
