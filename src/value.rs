use std::{
    borrow::Cow,
    fmt::{self, Display, Formatter},
};

/// The dynamic type of a [`Value`].
///
/// Every kind has a canonical lowercase name, which is what appears in type
/// mismatch messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Nil,
    Bool,
    Int,
    Int8,
    Int16,
    Int32,
    Int64,
    Uint,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Float32,
    Float64,
    Char,
    String,
}

impl Kind {
    /// The canonical name of this kind
    ///
    /// ```
    /// use ut_asserts::{Kind, Value};
    ///
    /// assert_eq!(Kind::String.name(), "string");
    /// assert_eq!(Value::from(10usize).kind().name(), "uint");
    /// assert_eq!(Value::from(None::<bool>).kind().name(), "<nil>");
    /// ```
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Kind::Nil => "<nil>",
            Kind::Bool => "bool",
            Kind::Int => "int",
            Kind::Int8 => "int8",
            Kind::Int16 => "int16",
            Kind::Int32 => "int32",
            Kind::Int64 => "int64",
            Kind::Uint => "uint",
            Kind::Uint8 => "uint8",
            Kind::Uint16 => "uint16",
            Kind::Uint32 => "uint32",
            Kind::Uint64 => "uint64",
            Kind::Float32 => "float32",
            Kind::Float64 => "float64",
            Kind::Char => "char",
            Kind::String => "string",
        }
    }
}

impl Display for Kind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/**
A value whose type is only known at runtime.

Checkers accept anything that converts into a `Value`: `bool`, `char`, all
the fixed-width integer and float primitives, strings (borrowed or owned),
`()` and `Option`s of those. Values of different [`Kind`]s are never equal,
so `Value::from(1i32) != Value::from(1i64)`.

String data is borrowed when possible, so building a `Value` from a `&str`
doesn't allocate.

```
use ut_asserts::{Kind, Value};

let value = Value::from("Left");
assert_eq!(value.kind(), Kind::String);
assert_eq!(value.to_string(), "Left");
assert_eq!(value, Value::from(String::from("Left")));
assert_ne!(value, Value::from('L'));
```
*/
#[derive(Debug, Clone, PartialEq)]
pub enum Value<'a> {
    Nil,
    Bool(bool),
    Int(isize),
    Int8(i8),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    Uint(usize),
    Uint8(u8),
    Uint16(u16),
    Uint32(u32),
    Uint64(u64),
    Float32(f32),
    Float64(f64),
    Char(char),
    String(Cow<'a, str>),
}

impl Value<'_> {
    #[must_use]
    pub fn kind(&self) -> Kind {
        match *self {
            Value::Nil => Kind::Nil,
            Value::Bool(_) => Kind::Bool,
            Value::Int(_) => Kind::Int,
            Value::Int8(_) => Kind::Int8,
            Value::Int16(_) => Kind::Int16,
            Value::Int32(_) => Kind::Int32,
            Value::Int64(_) => Kind::Int64,
            Value::Uint(_) => Kind::Uint,
            Value::Uint8(_) => Kind::Uint8,
            Value::Uint16(_) => Kind::Uint16,
            Value::Uint32(_) => Kind::Uint32,
            Value::Uint64(_) => Kind::Uint64,
            Value::Float32(_) => Kind::Float32,
            Value::Float64(_) => Kind::Float64,
            Value::Char(_) => Kind::Char,
            Value::String(_) => Kind::String,
        }
    }
}

impl Display for Value<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => f.write_str("<nil>"),
            Value::Bool(value) => Display::fmt(value, f),
            Value::Int(value) => Display::fmt(value, f),
            Value::Int8(value) => Display::fmt(value, f),
            Value::Int16(value) => Display::fmt(value, f),
            Value::Int32(value) => Display::fmt(value, f),
            Value::Int64(value) => Display::fmt(value, f),
            Value::Uint(value) => Display::fmt(value, f),
            Value::Uint8(value) => Display::fmt(value, f),
            Value::Uint16(value) => Display::fmt(value, f),
            Value::Uint32(value) => Display::fmt(value, f),
            Value::Uint64(value) => Display::fmt(value, f),
            Value::Float32(value) => Display::fmt(value, f),
            Value::Float64(value) => Display::fmt(value, f),
            Value::Char(value) => Display::fmt(value, f),
            Value::String(value) => f.write_str(value),
        }
    }
}

/// Implement `From<$type> for Value` for each primitive, wrapping it in the
/// matching variant.
macro_rules! value_from {
    ($($type:ty => $variant:ident,)+) => {$(
        impl From<$type> for Value<'_> {
            #[inline]
            fn from(value: $type) -> Self {
                Value::$variant(value)
            }
        }
    )+};
}

value_from! {
    bool => Bool,
    isize => Int,
    i8 => Int8,
    i16 => Int16,
    i32 => Int32,
    i64 => Int64,
    usize => Uint,
    u8 => Uint8,
    u16 => Uint16,
    u32 => Uint32,
    u64 => Uint64,
    f32 => Float32,
    f64 => Float64,
    char => Char,
}

impl From<()> for Value<'_> {
    #[inline]
    fn from((): ()) -> Self {
        Value::Nil
    }
}

impl<'a> From<&'a str> for Value<'a> {
    #[inline]
    fn from(value: &'a str) -> Self {
        Value::String(Cow::Borrowed(value))
    }
}

impl<'a> From<&'a String> for Value<'a> {
    #[inline]
    fn from(value: &'a String) -> Self {
        Value::String(Cow::Borrowed(value.as_str()))
    }
}

impl From<String> for Value<'_> {
    #[inline]
    fn from(value: String) -> Self {
        Value::String(Cow::Owned(value))
    }
}

impl<'a> From<Cow<'a, str>> for Value<'a> {
    #[inline]
    fn from(value: Cow<'a, str>) -> Self {
        Value::String(value)
    }
}

impl<'a, T: Into<Value<'a>>> From<Option<T>> for Value<'a> {
    #[inline]
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => value.into(),
            None => Value::Nil,
        }
    }
}
