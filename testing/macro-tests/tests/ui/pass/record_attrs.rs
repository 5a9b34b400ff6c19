use fieldpatch::prelude::*;

#[derive(Patchable)]
pub struct Inner {
    pub value: i16,
}

#[derive(Patchable)]
pub struct Outer<'a, T: Clone> {
    #[patch(readonly)]
    pub id: u32,
    #[patch(rename = "Alias")]
    pub name: String,
    #[patch(skip)]
    pub cache: std::collections::HashMap<String, String>,
    pub inner: Box<Inner>,
    pub borrowed: &'a mut Inner,
    pub generic: T,
}

fn main() {
    let mut borrowed = Inner { value: 0 };
    let mut outer = Outer {
        id: 1,
        name: String::new(),
        cache: Default::default(),
        inner: Box::new(Inner { value: 0 }),
        borrowed: &mut borrowed,
        generic: 0u8,
    };

    let patch = PatchSet::new()
        .with("alias", "x")
        .with("inner.value", PatchValue::numeric("-3"))
        .with("borrowed.value", PatchValue::numeric("4"))
        .with("generic", PatchValue::numeric("5"));

    fieldpatch::patch_it(&mut outer, &patch).unwrap();

    assert_eq!(outer.name, "x");
    assert_eq!(outer.inner.value, -3);
    assert_eq!(outer.generic, 5);
    assert_eq!(outer.borrowed.value, 4);
}
