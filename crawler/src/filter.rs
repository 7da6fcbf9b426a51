/// Decides which discovered links are worth following.
///
/// A link is kept iff it starts with the base prefix, carries no `#` fragment,
/// and the part after the prefix has no `:` (which excludes namespaced pages
/// such as `Talk:` or `Category:`).
#[derive(Debug, Clone)]
pub struct LinkFilter {
    prefix: String,
}

impl LinkFilter {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self { prefix: prefix.into() }
    }

    pub fn prefix(&self) -> &str { &self.prefix }

    pub fn accepts(&self, url: &str) -> bool {
        let Some(rest) = url.strip_prefix(self.prefix.as_str()) else { return false };
        !url.contains('#') && !rest.contains(':')
    }
}
