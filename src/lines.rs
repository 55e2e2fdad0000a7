use crate::options::Options;
use log::trace;

///
/// Split raw content into cleaned lines with the default options.
///
pub fn split_content(content: &str) -> Vec<String> {
    split_content_with(content, &Options::default())
}

///
/// Split raw content into cleaned lines.
///
/// For every `'\n'` separated line :
///
/// - cut at the first inline comment marker (the marker is dropped too)
/// - trim surrounding whitespace, a trailing `'\r'` goes away here
/// - drop it when empty or when it starts with the comment prefix
///
/// Order of the source is kept.
///
pub fn split_content_with(content: &str, options: &Options) -> Vec<String> {
    let marker = options.comment_marker();
    let prefix = options.comment_prefix();

    content
        .split('\n')
        .enumerate()
        .filter_map(move |(idx, line)| {
            let line = match line.find(marker) {
                Some(end) => &line[..end],
                None => line,
            };

            let line = line.trim();

            if line.is_empty() || line.starts_with(prefix) {
                trace!("line {} skipped", idx + 1);
                None
            } else {
                Some(String::from(line))
            }
        })
        .collect()
}
