use fieldpatch::prelude::*;

#[derive(Patchable)]
pub struct Card {
    pub suffix: String,
}

#[derive(Patchable)]
pub enum Payment {
    Card(Card),
    Credit(Box<Card>),
    Cash,
}

#[derive(Patchable)]
pub enum Never {}

fn main() {
    let mut payment = Payment::Credit(Box::new(Card {
        suffix: String::new(),
    }));

    let patch = PatchSet::new().with("suffix", "4242");
    fieldpatch::patch_it(&mut payment, &patch).unwrap();

    let Payment::Credit(card) = &payment else {
        unreachable!();
    };
    assert_eq!(card.suffix, "4242");

    let mut cash = Payment::Cash;
    assert!(fieldpatch::patch_it(&mut cash, &patch).is_err());
}
