use ecues_core::{Applied, AuxCounter, Axis, Category, Channel, Delta, TallyError, TallyState};

fn with_patients(n: u32) -> TallyState {
    let mut state = TallyState::new();
    for _ in 0..n {
        state
            .record_patient_event(Channel::Attended, Delta::Increment)
            .unwrap();
    }
    state
}

#[test]
fn classify_moves_from_unknown_pool_into_category() {
    let mut state = with_patients(2);

    state.reclassify(Category::Female, Delta::Increment).unwrap();
    state.reclassify(Category::Minors, Delta::Increment).unwrap();

    let c = state.counters();
    assert_eq!((c.female, c.sex_unknown), (1, 1));
    assert_eq!((c.minors, c.age_unknown), (1, 1));
    assert_eq!(c.total_patients(), 2);
}

#[test]
fn classify_with_empty_pool_names_the_axis() {
    let mut state = with_patients(1);
    state.reclassify(Category::Male, Delta::Increment).unwrap();
    let before = state.clone();

    let err = state.reclassify(Category::Female, Delta::Increment).unwrap_err();
    assert_eq!(err, TallyError::EmptyPool { axis: Axis::Sex });
    assert_eq!(err.to_string(), "No hay pacientes en S/D (Sexo) para clasificar.");
    assert_eq!(state, before);

    state.reclassify(Category::Adults, Delta::Increment).unwrap();
    let err = state.reclassify(Category::Minors, Delta::Increment).unwrap_err();
    assert_eq!(err.to_string(), "No hay pacientes en S/D (Edad) para clasificar.");
}

#[test]
fn declassify_returns_patient_to_unknown_pool() {
    let mut state = with_patients(1);
    state.reclassify(Category::Adults, Delta::Increment).unwrap();

    assert_eq!(
        state.reclassify(Category::Adults, Delta::Decrement).unwrap(),
        Applied::Updated
    );
    assert_eq!(state.counters().adults, 0);
    assert_eq!(state.counters().age_unknown, 1);

    // Nothing left to take back.
    assert_eq!(
        state.reclassify(Category::Adults, Delta::Decrement).unwrap(),
        Applied::Unchanged
    );
    assert_eq!(state.counters().age_unknown, 1);
}

#[test]
fn reclassify_never_changes_patient_totals() {
    let mut state = with_patients(3);
    state
        .record_patient_event(Channel::Transported, Delta::Increment)
        .unwrap();
    let before = *state.counters();

    for category in [Category::Male, Category::Female, Category::Minors, Category::Adults] {
        let _ = state.reclassify(category, Delta::Increment);
        let _ = state.reclassify(category, Delta::Decrement);
        let _ = state.reclassify(category, Delta::Increment);
    }

    let after = state.counters();
    assert_eq!(after.attended, before.attended);
    assert_eq!(after.transported, before.transported);
    assert_eq!(after.total_patients(), before.total_patients());
}

#[test]
fn manual_unknown_correction_only_decrements() {
    let mut state = TallyState::new();

    assert_eq!(
        state.adjust_unknown_direct(Axis::Sex, Delta::Decrement).unwrap(),
        Applied::Unchanged
    );
    assert_eq!(state.counters().sex_unknown, 0);

    let mut state = with_patients(2);
    assert_eq!(
        state.adjust_unknown_direct(Axis::Sex, Delta::Decrement).unwrap(),
        Applied::UnknownCleared(Axis::Sex)
    );
    assert_eq!(state.counters().sex_unknown, 1);
    assert_eq!(state.counters().attended, 2);

    let err = state
        .adjust_unknown_direct(Axis::Age, Delta::Increment)
        .unwrap_err();
    assert_eq!(err, TallyError::DirectIncrement { axis: Axis::Age });
    assert_eq!(
        err.to_string(),
        "Use \"Atendidos\" o \"Trasladados\" para agregar pacientes."
    );
    assert_eq!(state.counters().age_unknown, 2);
}

#[test]
fn auxiliary_counters_are_independent_and_floored() {
    let mut state = TallyState::new();

    assert_eq!(
        state.adjust_auxiliary(AuxCounter::Deceased, Delta::Decrement),
        Applied::Unchanged
    );
    state.adjust_auxiliary(AuxCounter::Deceased, Delta::Increment);
    state.adjust_auxiliary(AuxCounter::Evacuated, Delta::Increment);
    state.adjust_auxiliary(AuxCounter::MobileUnits, Delta::Increment);
    state.adjust_auxiliary(AuxCounter::MobileUnits, Delta::Increment);
    state.adjust_auxiliary(AuxCounter::AirUnits, Delta::Increment);
    state.adjust_auxiliary(AuxCounter::AirUnits, Delta::Decrement);

    let c = state.counters();
    assert_eq!(c.deceased, 1);
    assert_eq!(c.evacuated, 1);
    assert_eq!(c.mobile_units, 2);
    assert_eq!(c.air_units, 0);
    assert_eq!(c.total_patients(), 0);
    assert_eq!(c.sex_unknown, 0);
}
