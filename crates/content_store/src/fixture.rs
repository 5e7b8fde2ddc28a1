use chrono::NaiveDate;
use shared::domain::{Author, NewsId, NewsItem};

const PLACEHOLDER_IMAGE: &str = "/placeholder.jpg";

fn portrait(photo: &str) -> String {
    format!(
        "https://images.unsplash.com/{photo}?ixlib=rb-1.2.1&ixid=eyJhcHBfaWQiOjEyMDd9&auto=format&fit=facearea&facepad=2&w=256&h=256&q=80"
    )
}

fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

pub(crate) fn bundled_news() -> Vec<NewsItem> {
    vec![
        NewsItem {
            id: NewsId(1),
            title: "Innovation dans le secteur de l'énergie".to_string(),
            description: "Une nouvelle technologie révolutionnaire promet de transformer le secteur de l'énergie avec une efficacité accrue et une empreinte carbone réduite. Cette avancée pourrait permettre une transition plus rapide vers les énergies renouvelables et réduire considérablement notre dépendance aux combustibles fossiles.".to_string(),
            image_url: PLACEHOLDER_IMAGE.to_string(),
            date: day(2024, 4, 5),
            category: "Énergie".to_string(),
            author: Some(Author {
                name: "Marie Dupont".to_string(),
                role: "Experte en énergie".to_string(),
                image_url: portrait("photo-1494790108377-be9c29b29330"),
            }),
        },
        NewsItem {
            id: NewsId(2),
            title: "Tendances du marché immobilier 2024".to_string(),
            description: "Analyse approfondie des tendances actuelles du marché immobilier et projections pour l'année 2024. Les experts prévoient une stabilisation des prix après la période de volatilité, avec un intérêt croissant pour les propriétés écologiques et les espaces de travail hybrides.".to_string(),
            image_url: PLACEHOLDER_IMAGE.to_string(),
            date: day(2024, 4, 4),
            category: "Immobilier".to_string(),
            author: Some(Author {
                name: "Thomas Martin".to_string(),
                role: "Analyste immobilier".to_string(),
                image_url: portrait("photo-1519244703995-f4e0f30006d5"),
            }),
        },
        NewsItem {
            id: NewsId(3),
            title: "L'IA transforme le conseil en entreprise".to_string(),
            description: "L'intelligence artificielle révolutionne le secteur du conseil en entreprise, permettant des analyses plus précises et des recommandations personnalisées. Les cabinets de conseil adoptent rapidement ces technologies pour améliorer leur efficacité et offrir de nouveaux services à leurs clients.".to_string(),
            image_url: PLACEHOLDER_IMAGE.to_string(),
            date: day(2024, 4, 3),
            category: "Technologie".to_string(),
            author: Some(Author {
                name: "Sophie Laurent".to_string(),
                role: "Consultante en transformation digitale".to_string(),
                image_url: portrait("photo-1438761681033-6461ffad8d80"),
            }),
        },
        NewsItem {
            id: NewsId(4),
            title: "Durabilité et croissance économique".to_string(),
            description: "Comment les entreprises intègrent la durabilité dans leur modèle économique tout en maintenant une croissance robuste. Les études montrent que les entreprises engagées dans des pratiques durables obtiennent de meilleurs résultats financiers à long terme.".to_string(),
            image_url: PLACEHOLDER_IMAGE.to_string(),
            date: day(2024, 4, 2),
            category: "Développement durable".to_string(),
            author: Some(Author {
                name: "Lucas Dubois".to_string(),
                role: "Expert en économie circulaire".to_string(),
                image_url: portrait("photo-1507003211169-0a1dd7228f2d"),
            }),
        },
    ]
}
