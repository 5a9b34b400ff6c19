//! Field locator: walks a patchable value along a token list and hands
//! back the terminal field it lands on.

use crate::{
    path::Path,
    traits::{Access, Node, PatchField, Patchable, Refusal},
    value::{Value, ValueKind},
};

///
/// FieldHandle
///
/// Borrowed, settable-or-not view of one terminal field. Lives only as
/// long as the borrow of the target it was located in.
///

pub struct FieldHandle<'a> {
    field: &'a mut dyn PatchField,
    access: Access,
}

impl FieldHandle<'_> {
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        self.field.kind()
    }

    #[must_use]
    pub const fn access(&self) -> Access {
        self.access
    }

    #[must_use]
    pub const fn is_writable(&self) -> bool {
        self.access.is_writable()
    }

    /// Assign a value whose kind must already match the field.
    pub(crate) fn assign(&mut self, value: Value) -> Result<(), Refusal> {
        self.field.assign(value)
    }
}

///
/// Located
///
/// Result of a successful walk.
///

pub struct Located<'a> {
    handle: FieldHandle<'a>,
    field: &'static str,
    trail: String,
    depth: usize,
    unconsumed: usize,
}

impl<'a> Located<'a> {
    /// Identifier of the last record field matched; empty when the target
    /// itself is a leaf.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        self.field
    }

    /// Normalized identifiers traversed, joined by the path delimiter.
    #[must_use]
    pub fn trail(&self) -> &str {
        &self.trail
    }

    /// Number of record fields walked through to reach the leaf.
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// Tokens left over when a leaf was reached before the path ran out.
    #[must_use]
    pub const fn unconsumed(&self) -> usize {
        self.unconsumed
    }

    #[must_use]
    pub const fn handle(&self) -> &FieldHandle<'a> {
        &self.handle
    }

    pub const fn handle_mut(&mut self) -> &mut FieldHandle<'a> {
        &mut self.handle
    }
}

///
/// Cursor
///
/// Walk state carried from one record level to the next.
///

struct Cursor {
    field: &'static str,
    trail: String,
    depth: usize,
    access: Access,
}

impl Cursor {
    const fn root() -> Self {
        Self {
            field: "",
            trail: String::new(),
            depth: 0,
            access: Access::Writable,
        }
    }

    fn descend(&mut self, ident: &'static str, access: Access) {
        if !self.trail.is_empty() {
            self.trail.push(Path::DELIMITER);
        }
        self.trail.push_str(ident);
        self.field = ident;
        self.depth += 1;
        self.access = self.access.then(access);
    }
}

/// Locate the terminal field addressed by `tokens`.
///
/// Returns `None` when a record has no field named by the next token, when
/// the walk meets a sequence or an empty indirection, or when a record is
/// reached with no tokens left. Tokens remaining once a leaf is reached are
/// reported through `Located::unconsumed`, not rejected here.
///
/// Read-only fields are located too. Callers outside the crate go through
/// `Patcher::locate`, which refuses them.
pub(crate) fn locate<'a>(
    target: &'a mut dyn Patchable,
    tokens: &[String],
) -> Option<Located<'a>> {
    walk(target, tokens, Cursor::root())
}

fn walk<'a>(
    value: &'a mut dyn Patchable,
    tokens: &[String],
    mut cursor: Cursor,
) -> Option<Located<'a>> {
    match value.node() {
        Node::Record(record) => {
            let (token, rest) = tokens.split_first()?;
            let slot = record.field_mut(token)?;
            cursor.descend(slot.ident(), slot.access());

            walk(slot.into_value(), rest, cursor)
        }
        Node::Field(field) => Some(Located {
            handle: FieldHandle {
                field,
                access: cursor.access,
            },
            field: cursor.field,
            trail: cursor.trail,
            depth: cursor.depth,
            unconsumed: tokens.len(),
        }),
        Node::Sequence | Node::Missing => None,
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::{FieldSlot, Record};

    // Hand-written records so the walk is tested without the derive.

    #[derive(Default)]
    struct Inner {
        city: String,
        locked: u16,
    }

    impl Record for Inner {
        fn field_idents(&self) -> &'static [&'static str] {
            &["City", "Locked"]
        }

        fn field_mut(&mut self, ident: &str) -> Option<FieldSlot<'_>> {
            match ident {
                "City" => Some(FieldSlot::new("City", Access::Writable, &mut self.city)),
                "Locked" => Some(FieldSlot::new("Locked", Access::ReadOnly, &mut self.locked)),
                _ => None,
            }
        }
    }

    impl Patchable for Inner {
        fn node(&mut self) -> Node<'_> {
            Node::Record(self)
        }
    }

    #[derive(Default)]
    struct Outer {
        age: i32,
        inner: Inner,
        boxed: Option<Box<Inner>>,
        hidden: Inner,
        tags: Vec<String>,
    }

    impl Record for Outer {
        fn field_idents(&self) -> &'static [&'static str] {
            &["Age", "Inner", "Boxed", "Hidden", "Tags"]
        }

        fn field_mut(&mut self, ident: &str) -> Option<FieldSlot<'_>> {
            match ident {
                "Age" => Some(FieldSlot::new("Age", Access::Writable, &mut self.age)),
                "Inner" => Some(FieldSlot::new("Inner", Access::Writable, &mut self.inner)),
                "Boxed" => Some(FieldSlot::new("Boxed", Access::Writable, &mut self.boxed)),
                "Hidden" => Some(FieldSlot::new("Hidden", Access::ReadOnly, &mut self.hidden)),
                "Tags" => Some(FieldSlot::new("Tags", Access::Writable, &mut self.tags)),
                _ => None,
            }
        }
    }

    impl Patchable for Outer {
        fn node(&mut self) -> Node<'_> {
            Node::Record(self)
        }
    }

    fn tokens(path: &str) -> Vec<String> {
        Path::from(path).tokenize()
    }

    #[test]
    fn locates_top_level_leaf() {
        let mut outer = Outer::default();
        let located = locate(&mut outer, &tokens("age")).unwrap();

        assert_eq!(located.field(), "Age");
        assert_eq!(located.trail(), "Age");
        assert_eq!(located.handle().kind(), ValueKind::Int32);
        assert!(located.handle().is_writable());
    }

    #[test]
    fn locates_nested_leaf_and_records_trail() {
        let mut outer = Outer::default();
        let located = locate(&mut outer, &tokens("inner.city")).unwrap();

        assert_eq!(located.field(), "City");
        assert_eq!(located.trail(), "Inner.City");
        assert_eq!(located.depth(), 2);
        assert_eq!(located.unconsumed(), 0);
    }

    #[test]
    fn unknown_token_does_not_resolve() {
        let mut outer = Outer::default();

        assert!(locate(&mut outer, &tokens("unknown.field")).is_none());
        assert!(locate(&mut outer, &tokens("inner.zip")).is_none());
        assert!(locate(&mut outer, &tokens("")).is_none());
    }

    #[test]
    fn match_is_case_sensitive_after_normalizing() {
        let mut outer = Outer::default();

        assert!(locate(&mut outer, &tokens("AGE")).is_none());
        assert!(locate(&mut outer, &tokens("Age")).is_some());
    }

    #[test]
    fn record_without_remaining_tokens_does_not_resolve() {
        let mut outer = Outer::default();

        assert!(locate(&mut outer, &tokens("inner")).is_none());
    }

    #[test]
    fn empty_indirection_does_not_resolve() {
        let mut outer = Outer::default();

        assert!(locate(&mut outer, &tokens("boxed.city")).is_none());

        outer.boxed = Some(Box::default());
        let located = locate(&mut outer, &tokens("boxed.city")).unwrap();
        assert_eq!(located.trail(), "Boxed.City");
    }

    #[test]
    fn sequence_never_resolves() {
        let mut outer = Outer {
            tags: vec!["a".into()],
            ..Default::default()
        };

        assert!(locate(&mut outer, &tokens("tags")).is_none());
        assert!(locate(&mut outer, &tokens("tags.0")).is_none());
    }

    #[test]
    fn leaf_reports_excess_tokens() {
        let mut outer = Outer::default();
        let located = locate(&mut outer, &tokens("age.extra.more")).unwrap();

        assert_eq!(located.field(), "Age");
        assert_eq!(located.unconsumed(), 2);
    }

    #[test]
    fn read_only_is_inherited_downwards() {
        let mut outer = Outer::default();

        let direct = locate(&mut outer, &tokens("inner.locked")).unwrap();
        assert!(!direct.handle().is_writable());

        let nested = locate(&mut outer, &tokens("hidden.city")).unwrap();
        assert_eq!(nested.handle().access(), Access::ReadOnly);
    }

    #[test]
    fn leaf_target_is_its_own_field() {
        let mut value = 5u8;
        let located = locate(&mut value, &tokens("anything")).unwrap();

        assert_eq!(located.field(), "");
        assert_eq!(located.depth(), 0);
        assert_eq!(located.unconsumed(), 1);
    }
}
