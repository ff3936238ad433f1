//! Fixture dataset for the development backend.
//!
//! Mirrors the hosted test data: a handful of projects with their customers,
//! materials, measurement records, and appointments. Everything lives in the
//! shared [`Store`]; POST endpoints append to it at runtime.

use chrono::NaiveDate;

use buildnote_core::measurement::{AreaEntry, LengthEntry, MeasurementDraft, MeasurementType};
use buildnote_core::model::{Appointment, Customer, Material, Project};
use buildnote_core::types::EpochMillis;
use buildnote_store::repositories::{
    AppointmentRepo, CustomerRepo, MaterialRepo, MeasurementRepo, ProjectRepo,
};
use buildnote_store::Store;

/// Epoch millis at UTC midnight for a fixture date.
fn millis(year: i32, month: u32, day: u32) -> EpochMillis {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .expect("fixture date must be valid")
        .and_utc()
        .timestamp_millis()
}

/// Populate `store` with the development dataset.
pub async fn seed(store: &Store) {
    ProjectRepo::replace_all(store, projects()).await;
    CustomerRepo::replace_all(store, customers()).await;

    for project in projects() {
        MaterialRepo::replace_for_project(store, project.id, materials(project.id)).await;
    }

    let mut draft = MeasurementDraft {
        name: "Estrich EG".into(),
        notes: "Wohnzimmer und Flur".into(),
        measurement_type: MeasurementType::Area,
        ..MeasurementDraft::default()
    };
    draft.add_area_entry(AreaEntry {
        description: "Wohnzimmer".into(),
        length: Some(6.2),
        width: Some(4.5),
        include_deduction: false,
        deduction_length: None,
        deduction_width: None,
    });
    draft.add_area_entry(AreaEntry {
        description: "Flur".into(),
        length: Some(3.0),
        width: Some(1.4),
        include_deduction: true,
        deduction_length: Some(0.8),
        deduction_width: Some(0.8),
    });
    MeasurementRepo::add(store, draft.into_record(1, 1)).await;

    let mut draft = MeasurementDraft {
        name: "Sockelleiste OG".into(),
        ..MeasurementDraft::default()
    };
    draft.add_length_entry(LengthEntry {
        description: "Schlafzimmer".into(),
        length: Some(14.6),
        include_deduction: true,
        deduction_length: Some(0.9),
    });
    MeasurementRepo::add(store, draft.into_record(2, 1)).await;

    AppointmentRepo::replace_all(store, appointments()).await;

    tracing::info!("Fixture dataset seeded");
}

fn projects() -> Vec<Project> {
    vec![
        Project {
            id: 1,
            name: "Projekt Alpha".into(),
            street: "Musterstraße 12".into(),
            city_zip: "12345 Musterstadt".into(),
            additional_info: "Hinterhaus, 2. OG".into(),
            description: "Trockenbau und Estricharbeiten".into(),
            created_at: millis(2026, 3, 2),
            customer_id: 1,
        },
        Project {
            id: 2,
            name: "Projekt Beta".into(),
            street: "Hauptstraße 3".into(),
            city_zip: "60311 Frankfurt".into(),
            additional_info: String::new(),
            description: "Komplettsanierung Badezimmer".into(),
            created_at: millis(2026, 4, 18),
            customer_id: 2,
        },
        Project {
            id: 3,
            name: "Projekt Gamma".into(),
            street: "Bahnhofstraße 8".into(),
            city_zip: "63225 Langen".into(),
            additional_info: "Zufahrt über Hof".into(),
            description: "Dachgeschossausbau".into(),
            created_at: millis(2026, 5, 30),
            customer_id: 1,
        },
        Project {
            id: 4,
            name: "Projekt Delta".into(),
            street: "Gartenweg 21".into(),
            city_zip: "Egelsbach".into(),
            additional_info: String::new(),
            description: String::new(),
            created_at: millis(2026, 7, 6),
            customer_id: 3,
        },
        Project {
            id: 5,
            name: "Projekt Epsilon".into(),
            street: "Am Weiher 5".into(),
            city_zip: "64521 Groß-Gerau".into(),
            additional_info: String::new(),
            description: "Fassadenanstrich".into(),
            created_at: millis(2026, 8, 10),
            customer_id: 2,
        },
    ]
}

fn customers() -> Vec<Customer> {
    vec![
        Customer {
            id: 1,
            name: "Max Mustermann".into(),
            email: "max.mustermann@example.com".into(),
            phone: "+49 6103 123456".into(),
        },
        Customer {
            id: 2,
            name: "Erika Beispiel".into(),
            email: "erika.beispiel@example.com".into(),
            phone: "+49 69 987654".into(),
        },
        Customer {
            id: 3,
            name: "Bauträger Hessen GmbH".into(),
            email: "info@bautraeger-hessen.example".into(),
            phone: "+49 6150 55500".into(),
        },
    ]
}

fn materials(project_id: i64) -> Vec<Material> {
    match project_id {
        1 => vec![
            Material {
                name: "Gipskartonplatte 12,5 mm".into(),
                number: 25,
                unit: "Stk".into(),
                project_id,
                price: Some(4.99),
            },
            Material {
                name: "Tiefengrund".into(),
                number: 10,
                unit: "l".into(),
                project_id,
                price: None,
            },
        ],
        2 => vec![Material {
            name: "Fliesenkleber flexibel".into(),
            number: 6,
            unit: "Sack".into(),
            project_id,
            price: Some(12.50),
        }],
        _ => Vec::new(),
    }
}

fn appointments() -> Vec<Appointment> {
    vec![
        Appointment {
            id: 1,
            name: "Baustellenbesprechung".into(),
            date: "2026-08-24".into(),
            start_time: "08:00".into(),
            end_time: "09:30".into(),
            notes: "Bauleiter bringt Pläne mit".into(),
            color: Some("#4CAF50".into()),
            project_id: 1,
            employee_ids: vec![1, 2],
        },
        Appointment {
            id: 2,
            name: "Abnahme vor Ort".into(),
            date: "2026-08-24".into(),
            start_time: "13:30".into(),
            end_time: "14:30".into(),
            notes: String::new(),
            color: None,
            project_id: 2,
            employee_ids: vec![1],
        },
        Appointment {
            id: 3,
            name: "Materiallieferung".into(),
            date: "2026-08-25".into(),
            start_time: "07:00".into(),
            end_time: "07:45".into(),
            notes: "Anlieferung über Hof".into(),
            color: Some("#2196F3".into()),
            project_id: 3,
            employee_ids: vec![2, 3],
        },
    ]
}
