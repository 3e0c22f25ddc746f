// Character, string, and byte generation for the quickgen library.
// Character generators draw a codepoint from a fixed range and decode
// it as Latin-1; string generators are joined character arrays, so
// string length follows the array sizing rules.

use crate::collections::array;
use crate::combinators::one_of;
use crate::generator::Generator;
use crate::ints::choose;

/// Any single-byte character, codepoints 0 through 255.
pub fn char_any() -> Generator<char> {
    choose(0, 255).map(|n| char::from(n as u8))
}

/// Printable ASCII, codepoints 32 through 126.
pub fn char_printable() -> Generator<char> {
    choose(32, 126).map(|n| char::from(n as u8))
}

/// ASCII digits.
pub fn char_numeric() -> Generator<char> {
    choose(48, 57).map(|n| char::from(n as u8))
}

/// ASCII letters, either case.
pub fn char_alpha() -> Generator<char> {
    one_of(vec![choose(65, 90), choose(97, 122)]).map(|n| char::from(n as u8))
}

/// ASCII letters and digits.
pub fn char_alphanumeric() -> Generator<char> {
    one_of(vec![choose(48, 57), choose(65, 90), choose(97, 122)]).map(|n| char::from(n as u8))
}

/// A string of characters from the given class, length bounded by the
/// session size.
pub fn string(chars: Generator<char>) -> Generator<String> {
    array(chars).map(|cs| cs.into_iter().collect())
}

/// A printable-ASCII string.
pub fn ascii_string() -> Generator<String> {
    string(char_printable())
}

/// A non-empty alphanumeric name, the closest thing to an interned
/// symbol this side of the language boundary.
pub fn identifier() -> Generator<String> {
    string(char_alphanumeric()).not_empty()
}

/// Raw bytes, length bounded by the session size.
pub fn bytes() -> Generator<Vec<u8>> {
    array(choose(0, 255).map(|n| n as u8))
}

const HEX: [char; 16] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'a', 'b', 'c', 'd', 'e', 'f',
];

/// A canonical RFC 4122 version-4 UUID string.
///
/// Draws 31 independent nibbles; the version nibble is fixed to 4 and
/// the variant nibble is masked into {8, 9, a, b}. The size bound has
/// no effect here.
pub fn uuid() -> Generator<String> {
    Generator::new(|source, _size| {
        let mut out = String::with_capacity(36);
        for position in 0..32 {
            if position == 8 || position == 12 || position == 16 || position == 20 {
                out.push('-');
            }
            let nibble = if position == 12 {
                // version
                0x4
            } else {
                let drawn = source.uniform_int(0, 15) as u8;
                if position == 16 {
                    // variant: top two bits forced to 10
                    (drawn & 0x3) | 0x8
                } else {
                    drawn
                }
            };
            out.push(HEX[nibble as usize]);
        }
        Ok(out)
    })
}
