///
/// Value Registry
///
/// Single source of truth for the native leaf types a field may hold.
/// Each entry is (Value variant, native type, label, numeric class).
///

// NOTE: `char` and `bool` are deliberately non-numeric; numeric literals
// never coerce into them.
macro_rules! value_registry_entries {
    ($macro:ident) => {
        $macro! {
            (Bool, bool, "bool", None),
            (Char, char, "char", None),
            (Int8, i8, "i8", Some(NumericClass::Signed { bits: i8::BITS })),
            (Int16, i16, "i16", Some(NumericClass::Signed { bits: i16::BITS })),
            (Int32, i32, "i32", Some(NumericClass::Signed { bits: i32::BITS })),
            (Int64, i64, "i64", Some(NumericClass::Signed { bits: i64::BITS })),
            (Isize, isize, "isize", Some(NumericClass::Signed { bits: isize::BITS })),
            (Uint8, u8, "u8", Some(NumericClass::Unsigned { bits: u8::BITS })),
            (Uint16, u16, "u16", Some(NumericClass::Unsigned { bits: u16::BITS })),
            (Uint32, u32, "u32", Some(NumericClass::Unsigned { bits: u32::BITS })),
            (Uint64, u64, "u64", Some(NumericClass::Unsigned { bits: u64::BITS })),
            (Usize, usize, "usize", Some(NumericClass::Unsigned { bits: usize::BITS })),
            (Float32, f32, "f32", Some(NumericClass::Float { bits: 32 })),
            (Float64, f64, "f64", Some(NumericClass::Float { bits: 64 })),
            (Text, String, "String", None),
        }
    };
}
