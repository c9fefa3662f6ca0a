/// Sentinel entry that switches a destination to free-text entry.
pub const OTHER_SENTINEL: &str = "OTROS";

const DEFAULT_HOSPITALS: &[&str] = &[
    "HOSPITAL PENNA",
    "HOSPITAL ARGERICH",
    "HOSPITAL RAMOS MEJIA",
    "HOSPITAL FERNANDEZ",
    "HOSPITAL RIVADAVIA",
    "HOSPITAL PIROVANO",
    "HOSPITAL TORNU",
    "HOSPITAL SANTOJANNI",
    "HOSPITAL PIÑERO",
    "HOSPITAL GRIERSON",
    "HOSPITAL ZUBIZARRETA",
    "HOSPITAL VELEZ SARSFIELD",
    "HOSPITAL ALVAREZ",
    "HOSPITAL DURAND",
    "HOSPITAL MUÑIZ",
    "HOSPITAL SANTA LUCIA",
    "HOSPITAL GUTIERREZ",
    "HOSPITAL ELIZALDE",
];

/// Ordered list of selectable facilities plus the "other" sentinel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HospitalCatalog {
    hospitals: Vec<String>,
    other: String,
}

impl Default for HospitalCatalog {
    fn default() -> Self {
        Self::new(
            DEFAULT_HOSPITALS.iter().map(|h| h.to_string()).collect(),
            OTHER_SENTINEL,
        )
    }
}

impl HospitalCatalog {
    /// Builds a catalog; blank and duplicate entries are dropped, as is any
    /// entry equal to the sentinel.
    pub fn new(hospitals: Vec<String>, other: impl Into<String>) -> Self {
        let other = other.into();
        let mut cleaned: Vec<String> = Vec::with_capacity(hospitals.len());
        for name in hospitals {
            let name = name.trim().to_string();
            if name.is_empty() || name == other || cleaned.contains(&name) {
                continue;
            }
            cleaned.push(name);
        }
        Self {
            hospitals: cleaned,
            other,
        }
    }

    pub fn hospitals(&self) -> &[String] {
        &self.hospitals
    }

    pub fn other(&self) -> &str {
        &self.other
    }

    pub fn is_other(&self, value: &str) -> bool {
        value == self.other
    }

    /// Selectable options in display order, sentinel last.
    pub fn options(&self) -> impl Iterator<Item = &str> {
        self.hospitals
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(self.other.as_str()))
    }

    /// 1-based lookup into `options()`.
    pub fn option(&self, index: usize) -> Option<&str> {
        index.checked_sub(1).and_then(|i| self.options().nth(i))
    }
}
