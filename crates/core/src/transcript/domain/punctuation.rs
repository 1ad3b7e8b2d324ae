use super::token::Attachment;

/// Rebuild natural word spacing from `(text, attachment)` pairs.
///
/// Attach-to-previous text lands directly on the word currently being
/// accumulated, with no inserted space; when nothing is accumulating it
/// falls back to the last finished word, and failing that stands alone.
/// Standalone text flushes the accumulator and starts a new word. The caller
/// joins the returned words with single spaces, which yields
/// "Hello, world!" rather than "Hello , world !".
pub fn attach_punctuation<'a, I>(tokens: I) -> Vec<String>
where
    I: IntoIterator<Item = (&'a str, Attachment)>,
{
    let mut result: Vec<String> = Vec::new();
    let mut current_word = String::new();

    for (text, attachment) in tokens {
        match attachment {
            Attachment::Previous => {
                if !current_word.is_empty() {
                    current_word.push_str(text);
                } else if let Some(last) = result.last_mut() {
                    last.push_str(text);
                } else {
                    result.push(text.to_string());
                }
            }
            Attachment::Standalone => {
                if !current_word.is_empty() {
                    result.push(std::mem::take(&mut current_word));
                }
                current_word.push_str(text);
            }
        }
    }

    if !current_word.is_empty() {
        result.push(current_word);
    }

    result
}
