//! Reattach split possessive and contraction suffixes in transcripts.
//!
//! Transcript lines look like `<utterance-id> word word ...`. Some
//! tokenizers split `john's` into `john 's`; this filter glues any token
//! starting with `'` back onto the token before it. The utterance id is
//! never joined with anything.

use std::io::{self, BufRead, Write};

/// Transform one line.
pub fn join_suffix_line(line: &str) -> String {
    let mut tokens = line.split_whitespace();
    let Some(id) = tokens.next() else {
        return String::new();
    };

    let mut words: Vec<String> = Vec::new();
    let mut rest = tokens.peekable();
    while let Some(token) = rest.next() {
        let mut word = token.to_string();
        if let Some(suffix) = rest.next_if(|next| next.starts_with('\'')) {
            word.push_str(suffix);
        }
        words.push(word);
    }

    if words.is_empty() {
        // keep the separator the transcript format expects after the id
        format!("{} ", id)
    } else {
        format!("{} {}", id, words.join(" "))
    }
}

/// Filter `input` to `output` line by line, flushing after every line.
pub fn join_suffix<R: BufRead, W: Write>(input: R, mut output: W) -> io::Result<()> {
    for line in input.lines() {
        let line = line?;
        writeln!(output, "{}", join_suffix_line(&line))?;
        output.flush()?;
    }
    Ok(())
}
