use serde::Deserialize;

/// One DHCP pool definition, as supplied by configuration tooling.
///
/// `network` and `mask` are the only required fields; every other field is
/// optional and contributes nothing to the rendered block when absent or
/// empty. Fields that accept either a single string or a list of strings in
/// the input format are normalized into [`StringList`] during
/// deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PoolSpec {
    /// Subnet network address, e.g. `10.0.0.0`.
    #[serde(default)]
    pub network: String,
    /// Dotted-quad subnet mask, e.g. `255.255.255.0`. Also emitted verbatim
    /// as `option subnet-mask`.
    #[serde(default)]
    pub mask: String,
    /// Address ranges of the form `"<start> - <end>"`. An empty string or
    /// empty list means "no range".
    #[serde(default)]
    pub range: StringList,
    /// Failover peer name. Presence forces a `pool { ... }` sub-block even
    /// with no ranges.
    #[serde(default)]
    pub failover: Option<String>,
    /// Free-form statements placed verbatim at the top of the pool sub-block,
    /// e.g. `allow members of "some-class"`.
    #[serde(default)]
    pub pool_parameters: StringList,
    /// Default gateway, emitted as `option routers`.
    #[serde(default)]
    pub gateway: Option<String>,
    /// Free-form option bodies, each emitted as `option <text>;`.
    #[serde(default)]
    pub options: StringList,
    /// Free-form parameter statements, each emitted as `<text>;` with no
    /// `option` keyword, e.g. `max-lease-time 300`.
    #[serde(default)]
    pub parameters: StringList,
    /// DNS servers, emitted as one comma-joined `option domain-name-servers`
    /// line.
    #[serde(default)]
    pub nameservers: StringList,
    /// PXE boot server, emitted as `next-server`.
    #[serde(default)]
    pub pxeserver: Option<String>,
    /// Interface MTU, emitted as `option interface-mtu`.
    #[serde(default)]
    pub mtu: Option<u32>,
    /// Domain name, emitted as `option domain-name "<value>";`.
    #[serde(default)]
    pub domain_name: Option<String>,
    /// Search domains, emitted as `option domain-search` with each domain
    /// quoted. A single comma-separated string is split and trimmed.
    #[serde(default)]
    pub search_domains: StringList,
    /// Classless static routes, emitted as both the RFC 3442 and the
    /// Microsoft option with identical payloads.
    #[serde(default)]
    pub static_routes: Vec<StaticRoute>,
}

/// One classless static route: destination prefix, network, and gateway.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StaticRoute {
    /// Destination prefix length, 0–32.
    pub mask: u8,
    /// Destination network address.
    pub network: String,
    /// Next-hop gateway address.
    pub gateway: String,
}

/// A field that accepts either a single string or a list of strings.
///
/// Both input shapes collapse into one ordered `Vec<String>` here, so the
/// rendering code never branches on shape. A single empty string normalizes
/// to the empty list ("field not set"); empty entries inside an explicit list
/// are preserved and rejected later by field-specific validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "OneOrMany")]
pub struct StringList(Vec<String>);

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl From<OneOrMany> for StringList {
    fn from(value: OneOrMany) -> Self {
        match value {
            OneOrMany::One(s) if s.is_empty() => StringList(Vec::new()),
            OneOrMany::One(s) => StringList(vec![s]),
            OneOrMany::Many(items) => StringList(items),
        }
    }
}

impl StringList {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl From<&str> for StringList {
    fn from(value: &str) -> Self {
        OneOrMany::One(value.to_string()).into()
    }
}

impl From<Vec<&str>> for StringList {
    fn from(value: Vec<&str>) -> Self {
        StringList(value.into_iter().map(str::to_string).collect())
    }
}

impl From<Vec<String>> for StringList {
    fn from(value: Vec<String>) -> Self {
        StringList(value)
    }
}

impl<'a> IntoIterator for &'a StringList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
