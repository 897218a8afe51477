use std::{borrow::Cow, fmt};

/// One operand of a plain-form log call.
#[derive(Clone, Copy)]
pub struct Operand<'a> {
    value: &'a dyn fmt::Display,
    text: bool,
}

impl<'a> Operand<'a> {
    /// An operand spaced from its non-string neighbours.
    pub fn new<T: fmt::Display>(value: &'a T) -> Self {
        Self { value, text: false }
    }

    /// A string operand: never spaced from its neighbours.
    pub fn text<T: fmt::Display>(value: &'a T) -> Self {
        Self { value, text: true }
    }
}

/// Classifies a macro operand at compile time.
///
/// `(&&OperandKind(&value)).__operand()` resolves to [`TextOperand`] when the
/// value is a string type and to [`DisplayOperand`] otherwise: method lookup
/// tries the `&&OperandKind` receiver before auto-dereferencing to
/// `&OperandKind`.
#[doc(hidden)]
pub struct OperandKind<'a, T>(pub &'a T);

#[doc(hidden)]
pub trait TextOperand<'a> {
    fn __operand(self) -> Operand<'a>;
}

#[doc(hidden)]
pub trait DisplayOperand<'a> {
    fn __operand(self) -> Operand<'a>;
}

impl<'a, T: fmt::Display> DisplayOperand<'a> for &OperandKind<'a, T> {
    fn __operand(self) -> Operand<'a> {
        Operand::new(self.0)
    }
}

macro_rules! text_operands {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl<'a> TextOperand<'a> for &&OperandKind<'a, $ty> {
                fn __operand(self) -> Operand<'a> {
                    Operand::text(self.0)
                }
            }
        )+
    };
}

text_operands!(
    &str,
    &&str,
    &mut str,
    String,
    &String,
    &mut String,
    Cow<'_, str>,
    &Cow<'_, str>,
    Box<str>,
);

/// Operands rendered with the default spacing rules: a single space is added
/// between two adjacent operands when neither of them is a string.
#[derive(Clone, Copy)]
pub struct Operands<'a>(pub &'a [Operand<'a>]);

impl fmt::Display for Operands<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut previous_text = true;
        for (i, operand) in self.0.iter().enumerate() {
            if i > 0 && !previous_text && !operand.text {
                f.write_str(" ")?;
            }
            write!(f, "{}", operand.value)?;
            previous_text = operand.text;
        }
        Ok(())
    }
}
