/// Constant set for one deployment color.
///
/// The blue and green backends are the same server parameterized by this
/// struct; nothing about a deployment changes after process start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deployment {
    /// Version label reported in response bodies ("v1", "v2-buggy").
    pub version: &'static str,
    /// Deployment color ("Blue", "Green").
    pub color: &'static str,
    /// Demo name used by the catch-all greeting.
    pub demo_name: &'static str,
    /// Whether the status endpoint answers healthily. The buggy green
    /// release ships with this set to false to simulate a bad rollout.
    pub status_healthy: bool,
}

impl Deployment {
    /// The stable release.
    pub const BLUE: Deployment = Deployment {
        version: "v1",
        color: "Blue",
        demo_name: "Blue-Green Demo",
        status_healthy: true,
    };

    /// The broken release candidate.
    pub const GREEN_BUGGY: Deployment = Deployment {
        version: "v2-buggy",
        color: "Green",
        demo_name: "DevOps Demo",
        status_healthy: false,
    };

    /// Startup banner, e.g. "Blue v1" or "Green v2-buggy (BUGGY)".
    pub fn banner(&self) -> String {
        if self.status_healthy {
            format!("{} {}", self.color, self.version)
        } else {
            format!("{} {} (BUGGY)", self.color, self.version)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blue_constants() {
        assert_eq!(Deployment::BLUE.version, "v1");
        assert_eq!(Deployment::BLUE.color, "Blue");
        assert_eq!(Deployment::BLUE.demo_name, "Blue-Green Demo");
        assert!(Deployment::BLUE.status_healthy);
    }

    #[test]
    fn test_green_constants() {
        assert_eq!(Deployment::GREEN_BUGGY.version, "v2-buggy");
        assert_eq!(Deployment::GREEN_BUGGY.color, "Green");
        assert_eq!(Deployment::GREEN_BUGGY.demo_name, "DevOps Demo");
        assert!(!Deployment::GREEN_BUGGY.status_healthy);
    }

    #[test]
    fn test_banner() {
        assert_eq!(Deployment::BLUE.banner(), "Blue v1");
        assert_eq!(Deployment::GREEN_BUGGY.banner(), "Green v2-buggy (BUGGY)");
    }
}
