use core::iter::FusedIterator;

/// Splits a composite string (Accept-Language header, file path, list) into
/// candidate language identifiers, left to right.
///
/// `,` `;` and `.` terminate a candidate. `/` and `\` discard everything
/// scanned so far. A string without any of these delimiters is a single
/// candidate; otherwise the unterminated tail is not one, so `locales/en.json`
/// yields `en` and `en-US,fr;q=0.9` yields `en-US`, `fr`, `q=0`.
pub fn scan_candidates(input: &str) -> Candidates<'_> {
    Candidates {
        input,
        start: 0,
        position: 0,
        delimited: false,
        finished: false,
    }
}

#[derive(Clone, Debug)]
pub struct Candidates<'a> {
    input: &'a str,
    start: usize,
    position: usize,
    delimited: bool,
    finished: bool,
}

impl<'a> Iterator for Candidates<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.finished {
            return None;
        }

        // Delimiters are ASCII, so byte offsets are char boundaries.
        let bytes = self.input.as_bytes();
        while self.position < bytes.len() {
            let idx = self.position;
            self.position += 1;
            match bytes[idx] {
                b',' | b';' | b'.' => {
                    let candidate = &self.input[self.start..idx];
                    self.start = idx + 1;
                    self.delimited = true;
                    return Some(candidate);
                }
                b'/' | b'\\' => {
                    self.start = idx + 1;
                    self.delimited = true;
                }
                _ => {}
            }
        }

        self.finished = true;
        if self.delimited {
            None
        } else {
            Some(self.input.trim())
        }
    }
}

impl FusedIterator for Candidates<'_> {}
