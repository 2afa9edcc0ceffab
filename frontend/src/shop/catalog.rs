/// A marketplace the shop page can send a visitor to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformEntry {
    pub name: &'static str,
    pub description: &'static str,
    /// Absolute URL opened when the redirect countdown expires.
    pub url: &'static str,
    pub icon: &'static str,
    /// CSS gradient used for the card's hover wash.
    pub accent: &'static str,
    pub features: &'static [&'static str],
}

pub static PLATFORMS: [PlatformEntry; 2] = [
    PlatformEntry {
        name: "Meesho",
        description: "Best prices with COD available",
        url: "https://www.meesho.com/",
        icon: "🛍️",
        accent: "linear-gradient(135deg, #ec4899, #e11d48)",
        features: &["Cash on Delivery", "Easy Returns", "Best Prices"],
    },
    PlatformEntry {
        name: "Amazon",
        description: "Fast Prime delivery",
        url: "https://www.amazon.in/",
        icon: "📦",
        accent: "linear-gradient(135deg, #f97316, #d97706)",
        features: &["Prime Delivery", "Trusted Platform", "Easy Returns"],
    },
];

pub fn platforms() -> &'static [PlatformEntry] {
    &PLATFORMS
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use url::Url;

    #[test]
    fn every_destination_is_an_absolute_https_url() {
        for entry in platforms() {
            let parsed = Url::parse(entry.url)
                .unwrap_or_else(|e| panic!("{} has a malformed url: {}", entry.name, e));
            assert_eq!(parsed.scheme(), "https", "{}", entry.name);
            assert!(parsed.host_str().is_some(), "{}", entry.name);
        }
    }

    #[test]
    fn names_are_unique_and_entries_carry_metadata() {
        let names: HashSet<_> = platforms().iter().map(|p| p.name).collect();
        assert_eq!(names.len(), platforms().len());
        assert!(platforms().iter().all(|p| !p.features.is_empty()));
    }

    #[test]
    fn catalog_order_is_stable() {
        let names: Vec<_> = platforms().iter().map(|p| p.name).collect();
        assert_eq!(names, ["Meesho", "Amazon"]);
        assert_eq!(platforms()[1].url, "https://www.amazon.in/");
    }
}
