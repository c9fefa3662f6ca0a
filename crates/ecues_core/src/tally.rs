use serde::Serialize;

pub type AllocationId = u64;

/// Patient intake channel. Both count towards the patient total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Channel {
    Attended,
    Transported,
}

/// Single-unit step issued by the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Delta {
    Increment,
    Decrement,
}

/// Partition of the patient total that owns an unknown pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Axis {
    Sex,
    Age,
}

impl Axis {
    /// Operator-facing name used in notices.
    pub fn label(self) -> &'static str {
        match self {
            Axis::Sex => "Sexo",
            Axis::Age => "Edad",
        }
    }
}

/// Named category within a partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    Male,
    Female,
    Minors,
    Adults,
}

impl Category {
    pub fn axis(self) -> Axis {
        match self {
            Category::Male | Category::Female => Axis::Sex,
            Category::Minors | Category::Adults => Axis::Age,
        }
    }
}

/// Counters outside the sex/age partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AuxCounter {
    Deceased,
    Evacuated,
    MobileUnits,
    AirUnits,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Counters {
    pub attended: u32,
    pub transported: u32,
    pub male: u32,
    pub female: u32,
    pub sex_unknown: u32,
    pub minors: u32,
    pub adults: u32,
    pub age_unknown: u32,
    pub mobile_units: u32,
    pub air_units: u32,
    pub deceased: u32,
    pub evacuated: u32,
}

impl Counters {
    pub fn total_patients(&self) -> u32 {
        self.attended + self.transported
    }

    pub fn channel(&self, channel: Channel) -> u32 {
        match channel {
            Channel::Attended => self.attended,
            Channel::Transported => self.transported,
        }
    }

    pub fn category(&self, category: Category) -> u32 {
        match category {
            Category::Male => self.male,
            Category::Female => self.female,
            Category::Minors => self.minors,
            Category::Adults => self.adults,
        }
    }

    pub fn unknown(&self, axis: Axis) -> u32 {
        match axis {
            Axis::Sex => self.sex_unknown,
            Axis::Age => self.age_unknown,
        }
    }

    pub fn auxiliary(&self, counter: AuxCounter) -> u32 {
        match counter {
            AuxCounter::Deceased => self.deceased,
            AuxCounter::Evacuated => self.evacuated,
            AuxCounter::MobileUnits => self.mobile_units,
            AuxCounter::AirUnits => self.air_units,
        }
    }

    pub(crate) fn channel_mut(&mut self, channel: Channel) -> &mut u32 {
        match channel {
            Channel::Attended => &mut self.attended,
            Channel::Transported => &mut self.transported,
        }
    }

    pub(crate) fn category_mut(&mut self, category: Category) -> &mut u32 {
        match category {
            Category::Male => &mut self.male,
            Category::Female => &mut self.female,
            Category::Minors => &mut self.minors,
            Category::Adults => &mut self.adults,
        }
    }

    pub(crate) fn unknown_mut(&mut self, axis: Axis) -> &mut u32 {
        match axis {
            Axis::Sex => &mut self.sex_unknown,
            Axis::Age => &mut self.age_unknown,
        }
    }

    pub(crate) fn auxiliary_mut(&mut self, counter: AuxCounter) -> &mut u32 {
        match counter {
            AuxCounter::Deceased => &mut self.deceased,
            AuxCounter::Evacuated => &mut self.evacuated,
            AuxCounter::MobileUnits => &mut self.mobile_units,
            AuxCounter::AirUnits => &mut self.air_units,
        }
    }
}

/// How a destination name was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum AllocationMode {
    /// Picked from the hospital catalog (empty name means nothing selected).
    #[default]
    Catalog,
    /// Typed in by the operator after choosing the "other" entry.
    Custom,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Allocation {
    pub id: AllocationId,
    pub name: String,
    pub count: u32,
    pub mode: AllocationMode,
}

impl Allocation {
    pub(crate) fn empty(id: AllocationId) -> Self {
        Self {
            id,
            name: String::new(),
            count: 0,
            mode: AllocationMode::Catalog,
        }
    }

    pub fn is_named(&self) -> bool {
        !self.name.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum IncidentField {
    Description,
    Address,
    Intervention,
    Notes,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct IncidentInfo {
    pub description: String,
    pub address: String,
    pub intervention: String,
    pub notes: String,
}

impl IncidentInfo {
    pub(crate) fn field_mut(&mut self, field: IncidentField) -> &mut String {
        match field {
            IncidentField::Description => &mut self.description,
            IncidentField::Address => &mut self.address,
            IncidentField::Intervention => &mut self.intervention,
            IncidentField::Notes => &mut self.notes,
        }
    }
}

/// The seven METHANE situational-report entries, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SituationField {
    MajorIncident,
    ExactLocation,
    IncidentType,
    Hazards,
    Access,
    Casualties,
    EmergencyServices,
}

impl SituationField {
    pub const ALL: [SituationField; 7] = [
        SituationField::MajorIncident,
        SituationField::ExactLocation,
        SituationField::IncidentType,
        SituationField::Hazards,
        SituationField::Access,
        SituationField::Casualties,
        SituationField::EmergencyServices,
    ];

    /// Single-letter key shown in the short summary.
    pub fn letter(self) -> &'static str {
        match self {
            SituationField::MajorIncident => "M",
            SituationField::ExactLocation => "E",
            SituationField::IncidentType => "T",
            SituationField::Hazards => "H",
            SituationField::Access => "A",
            SituationField::Casualties => "N",
            SituationField::EmergencyServices => "E",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct SituationReport {
    pub major_incident: String,
    pub exact_location: String,
    pub incident_type: String,
    pub hazards: String,
    pub access: String,
    pub casualties: String,
    pub emergency_services: String,
}

impl SituationReport {
    pub fn field(&self, field: SituationField) -> &str {
        match field {
            SituationField::MajorIncident => &self.major_incident,
            SituationField::ExactLocation => &self.exact_location,
            SituationField::IncidentType => &self.incident_type,
            SituationField::Hazards => &self.hazards,
            SituationField::Access => &self.access,
            SituationField::Casualties => &self.casualties,
            SituationField::EmergencyServices => &self.emergency_services,
        }
    }

    pub(crate) fn field_mut(&mut self, field: SituationField) -> &mut String {
        match field {
            SituationField::MajorIncident => &mut self.major_incident,
            SituationField::ExactLocation => &mut self.exact_location,
            SituationField::IncidentType => &mut self.incident_type,
            SituationField::Hazards => &mut self.hazards,
            SituationField::Access => &mut self.access,
            SituationField::Casualties => &mut self.casualties,
            SituationField::EmergencyServices => &mut self.emergency_services,
        }
    }

    /// True when any entry holds text at all, whitespace included.
    pub fn has_entries(&self) -> bool {
        SituationField::ALL
            .iter()
            .any(|field| !self.field(*field).is_empty())
    }

    /// True when any entry carries non-whitespace text.
    pub fn has_content(&self) -> bool {
        SituationField::ALL
            .iter()
            .any(|field| !self.field(*field).trim().is_empty())
    }
}

/// Canonical tally for one session.
///
/// Fields are only reachable read-only from outside the crate; every mutation
/// goes through the operations in `engine`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TallyState {
    pub(crate) counters: Counters,
    pub(crate) allocations: Vec<Allocation>,
    pub(crate) incident: IncidentInfo,
    pub(crate) situation: SituationReport,
    pub(crate) is_final: bool,
    #[serde(skip)]
    pub(crate) next_allocation_id: AllocationId,
}

impl Default for TallyState {
    fn default() -> Self {
        Self {
            counters: Counters::default(),
            allocations: vec![Allocation::empty(1)],
            incident: IncidentInfo::default(),
            situation: SituationReport::default(),
            is_final: false,
            next_allocation_id: 2,
        }
    }
}

impl TallyState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn counters(&self) -> &Counters {
        &self.counters
    }

    pub fn allocations(&self) -> &[Allocation] {
        &self.allocations
    }

    pub fn allocation(&self, id: AllocationId) -> Option<&Allocation> {
        self.allocations.iter().find(|a| a.id == id)
    }

    pub fn incident(&self) -> &IncidentInfo {
        &self.incident
    }

    pub fn situation(&self) -> &SituationReport {
        &self.situation
    }

    pub fn is_final(&self) -> bool {
        self.is_final
    }

    pub fn total_patients(&self) -> u32 {
        self.counters.total_patients()
    }

    /// Sum of the patients assigned to any destination.
    pub fn allocated_total(&self) -> u32 {
        self.allocations.iter().map(|a| a.count).sum()
    }
}
