//! Demo sites used to seed an empty deployment.

/// A fixed demo site: `(id, name, site code)`.
pub struct SampleSite {
    pub id: &'static str,
    pub name: &'static str,
    pub site_code: &'static str,
}

/// Manager id recorded on seeded sites.
pub const SAMPLE_MANAGER_ID: &str = "system";

pub const SAMPLE_SITES: [SampleSite; 3] = [
    SampleSite {
        id: "sample-1",
        name: "Test Construction Site",
        site_code: "TEST1",
    },
    SampleSite {
        id: "sample-2",
        name: "Demo Building Project",
        site_code: "DEMO2",
    },
    SampleSite {
        id: "sample-3",
        name: "Sample Renovation",
        site_code: "SAMP3",
    },
];
