//! Tokenizing text into words for the Markov chain

/// Nursery rhyme used as the default training text
pub const HUMPTY_DUMPTY: &str = "Humpty Dumpty sat on a wall
Humpty Dumpty had a great fall
All the king's horses and all the king's men
couldn't put Humpty together again";

/// Split text into words: runs of ASCII letters and apostrophes
///
/// Case is preserved ("All" and "all" are different states) and empty
/// fragments between separators are dropped.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !(c.is_ascii_alphabetic() || c == '\''))
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect()
}

/// Split a corpus into documents separated by blank lines
pub fn split_documents(text: &str) -> Vec<String> {
    let mut documents = Vec::new();
    let mut current = String::new();

    for line in text.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                documents.push(std::mem::take(&mut current));
            }
            continue;
        }
        if !current.is_empty() {
            current.push('\n');
        }
        current.push_str(line);
    }

    if !current.is_empty() {
        documents.push(current);
    }
    documents
}
