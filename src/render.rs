//! Text rendering for [`Sequence::join`](crate::Sequence::join).
//!
//! `join` accepts any element type that knows how to write itself as text.
//! Implementations are provided for strings, `bool`, `char` and every
//! primitive integer and float type. Floats render in plain decimal notation
//! with the shortest representation that round-trips (`2.0` renders as `2`,
//! `0.1` as `0.1`), never in exponent form.

use std::fmt::Write;

/// Capability to append a textual representation to a buffer.
///
/// # Examples
///
/// ```rust
/// use convenient_structures::Render;
///
/// let mut buffer = String::new();
/// 1.5_f64.render(&mut buffer);
/// true.render(&mut buffer);
/// assert_eq!(buffer, "1.5true");
/// ```
pub trait Render {
    /// Appends the textual representation of `self` to `buffer`.
    fn render(&self, buffer: &mut String);
}

impl Render for str {
    fn render(&self, buffer: &mut String) {
        buffer.push_str(self);
    }
}

impl Render for String {
    fn render(&self, buffer: &mut String) {
        buffer.push_str(self);
    }
}

impl Render for char {
    fn render(&self, buffer: &mut String) {
        buffer.push(*self);
    }
}

impl Render for bool {
    fn render(&self, buffer: &mut String) {
        buffer.push_str(if *self { "true" } else { "false" });
    }
}

impl<T: Render + ?Sized> Render for &T {
    fn render(&self, buffer: &mut String) {
        (**self).render(buffer);
    }
}

macro_rules! impl_render_via_display {
    ($($primitive:ty),* $(,)?) => {
        $(
            impl Render for $primitive {
                fn render(&self, buffer: &mut String) {
                    // Writing into a String cannot fail.
                    let _ = write!(buffer, "{self}");
                }
            }
        )*
    };
}

impl_render_via_display!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64,
);
