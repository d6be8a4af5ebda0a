//! Shared fixtures for linking integration tests
//!
//! A small marine-environment vocabulary in the shape the loader produces:
//! each category starts with a level-1 header.

#![allow(dead_code)]

use proptest::prelude::*;
use vocablink::{Category, Vocabulary, VocabularyItem};

fn items(category: Category, header: &str, entries: &[(&str, &str)]) -> Vec<VocabularyItem> {
    let mut out = vec![VocabularyItem::new(
        format!("{}0", &header[..1]),
        header,
        category,
        1,
    )];
    out.extend(
        entries
            .iter()
            .map(|(id, name)| VocabularyItem::new(*id, *name, category, 2)),
    );
    out
}

/// A representative vocabulary covering every boundary.
pub fn marine_vocabulary() -> Vocabulary {
    Vocabulary {
        activities: items(
            Category::Activity,
            "ACTIVITIES",
            &[
                ("A1", "Commercial fishing and bottom trawling"),
                ("A2", "Industrial manufacturing and chemical processing"),
                ("A3", "Intensive agriculture and fertilizer use"),
                ("A4", "Commercial shipping and vessel traffic"),
                ("A5", "Coastal construction and dredging"),
                ("A6", "Marine tourism and recreational boating"),
            ],
        ),
        pressures: items(
            Category::Pressure,
            "PRESSURES",
            &[
                ("P1", "Fishing bycatch of non-target species"),
                ("P2", "Fish stock depletion and overfishing"),
                ("P3", "Toxic chemical emissions and industrial waste"),
                ("P4", "Nutrient runoff from agricultural land"),
                ("P5", "Underwater noise from vessel traffic"),
                ("P6", "Seabed habitat disturbance and sediment resuspension"),
                ("P7", "Marine litter from coastal tourism"),
            ],
        ),
        consequences: items(
            Category::Consequence,
            "CONSEQUENCES",
            &[
                ("C1", "Fish stock collapse and species loss"),
                ("C2", "Eutrophication from nutrient runoff"),
                ("C3", "Toxic chemical contamination of marine food webs"),
                ("C4", "Seabed habitat loss and biodiversity decline"),
                ("C5", "Marine mammal disturbance from vessel noise"),
                ("C6", "Marine litter on coastal beaches"),
            ],
        ),
        controls: items(
            Category::Control,
            "CONTROLS",
            &[
                ("K1", "Fishing quotas to limit overfishing and bycatch"),
                ("K2", "Regulation of industrial chemical discharge"),
                ("K3", "Nutrient management plans to reduce agricultural runoff"),
                ("K4", "Vessel speed restrictions to reduce underwater noise"),
                ("K5", "Seabed habitat restoration"),
                ("K6", "Emergency response to toxic chemical contamination"),
                ("K7", "Clean-up of marine litter on coastal beaches"),
            ],
        ),
    }
}

/// Words the label strategy draws from: domain terms, stop words and noise.
const WORDS: &[&str] = &[
    "fishing", "trawling", "bycatch", "depletion", "industrial", "chemical",
    "emission", "waste", "marine", "coastal", "water", "pollution", "noise",
    "vessel", "shipping", "habitat", "loss", "nutrient", "runoff", "farming",
    "the", "of", "and", "from", "with", "reduce", "limit", "restoration",
    "response", "harbour", "2024", "(local)", "sea-bed",
];

/// Arbitrary free-text label built from [`WORDS`].
pub fn label() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(WORDS), 0..6).prop_map(|words| words.join(" "))
}

/// Arbitrary vocabulary with up to four items per category plus a header.
pub fn vocabulary() -> impl Strategy<Value = Vocabulary> {
    let category_items = |category: Category| {
        prop::collection::vec(label(), 0..5).prop_map(move |labels| {
            let mut items = vec![VocabularyItem::new("H", "HEADER", category, 1)];
            items.extend(labels.into_iter().enumerate().map(|(i, name)| {
                VocabularyItem::new(format!("{}{}", category.as_str(), i), name, category, 2)
            }));
            items
        })
    };

    (
        category_items(Category::Activity),
        category_items(Category::Pressure),
        category_items(Category::Consequence),
        category_items(Category::Control),
    )
        .prop_map(|(activities, pressures, consequences, controls)| Vocabulary {
            activities,
            pressures,
            consequences,
            controls,
        })
}
