use crate::{
    options::Options,
    types::{EnvMap, Pair, Parser},
};
use log::{debug, trace};

///
/// Map cleaned lines into variables with the default options.
///
pub fn map_content<S>(lines: &[S]) -> EnvMap
where
    S: AsRef<str>,
{
    map_content_with(lines, &Options::default())
}

///
/// Map cleaned lines into variables.
///
/// Lines without a separator or with an empty key are skipped, a later
/// line overrides an earlier one with the same key.
///
pub fn map_content_with<S>(lines: &[S], options: &Options) -> EnvMap
where
    S: AsRef<str>,
{
    lines
        .iter()
        .fold(EnvMap::new(), |mut envs, line| {
            let line: &str = line.as_ref();

            match Pair::parse(line, options) {
                Ok(pair) => {
                    let (key, value) = pair.into_owned();

                    if let Some(old) = envs.insert(key, value) {
                        debug!("duplicate key in {:?}, previous value {:?} dropped", line, old);
                    }
                }
                Err(e) => trace!("skipped: {}", e),
            }

            envs
        })
}
