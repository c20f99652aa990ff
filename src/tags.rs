//! Droplet tag composition.

use std::fmt;

/// Tag applied to every instance created by this tool.
pub const DEFAULT_TAG: &str = "pro";

/// Ordered tag list passed to the provider CLI.
///
/// The first element is always [`DEFAULT_TAG`], the second is the provider
/// tag, and user tags (if any) follow verbatim.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TagSet {
    tags: Vec<String>,
}

impl TagSet {
    /// Builds the tag list for `provider_tag` plus an optional comma-separated
    /// user tag string. An empty user string adds nothing.
    #[must_use]
    pub fn compose(provider_tag: &str, user_tags: &str) -> Self {
        let mut tags = vec![DEFAULT_TAG.to_owned(), provider_tag.to_owned()];
        if !user_tags.is_empty() {
            tags.push(user_tags.to_owned());
        }
        Self { tags }
    }

    /// Returns the composed elements in order.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.tags
    }
}

impl fmt::Display for TagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tags.join(","))
    }
}

/// Convenience wrapper rendering [`TagSet::compose`] as a comma-separated
/// string.
///
/// ```
/// assert_eq!(pro::tags::compose_tags("aws", ""), "pro,aws");
/// ```
#[must_use]
pub fn compose_tags(provider_tag: &str, user_tags: &str) -> String {
    TagSet::compose(provider_tag, user_tags).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("digitalocean", "web,db", "pro,digitalocean,web,db")]
    #[case("aws", "", "pro,aws")]
    #[case("gcp", "backend,api", "pro,gcp,backend,api")]
    fn composes_expected_string(
        #[case] provider: &str,
        #[case] user: &str,
        #[case] expected: &str,
    ) {
        assert_eq!(compose_tags(provider, user), expected);
    }

    #[rstest]
    #[case("digitalocean", "")]
    #[case("azure", "one")]
    #[case("openstack", "a,b,c")]
    fn default_and_provider_tags_lead(#[case] provider: &str, #[case] user: &str) {
        let rendered = compose_tags(provider, user);
        let parts = rendered.split(',').collect::<Vec<_>>();

        assert_eq!(parts.first().copied(), Some(DEFAULT_TAG));
        assert_eq!(parts.get(1).copied(), Some(provider));
        if user.is_empty() {
            assert_eq!(parts.len(), 2);
        } else {
            assert!(rendered.ends_with(user), "user tags should trail: {rendered}");
        }
    }

    #[rstest]
    fn empty_user_tags_leave_no_dangling_comma() {
        let tags = TagSet::compose("digitalocean", "");

        assert_eq!(tags.as_slice().len(), 2);
        assert!(!tags.to_string().ends_with(','));
    }
}
