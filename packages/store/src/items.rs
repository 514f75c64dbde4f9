//! The catalog record types and their built-in seed data.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::catalog::CatalogItem;

/// Wine color category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WineKind {
    Bile,
    Cervene,
    Ruzove,
}

/// One wine in the offer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wine {
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub year: String,
    pub description: String,
    pub price: String,
    pub image: String,
    #[serde(rename = "type")]
    pub kind: WineKind,
    pub attributes: Vec<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl CatalogItem for Wine {
    const KIND: &'static str = "wine";

    fn id(&self) -> &str {
        &self.id
    }
    fn set_id(&mut self, id: String) {
        self.id = id;
    }
    fn created_at(&self) -> &str {
        &self.created_at
    }
    fn set_created_at(&mut self, created_at: String) {
        self.created_at = created_at;
    }
    fn set_updated_at(&mut self, updated_at: Option<String>) {
        self.updated_at = updated_at;
    }
}

/// One news article.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsItem {
    #[serde(default)]
    pub id: String,
    /// Display date as the editor typed it, e.g. `10. 4. 2023`.
    pub date: String,
    pub title: String,
    pub content: String,
    pub image_url: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl CatalogItem for NewsItem {
    const KIND: &'static str = "news article";

    fn id(&self) -> &str {
        &self.id
    }
    fn set_id(&mut self, id: String) {
        self.id = id;
    }
    fn created_at(&self) -> &str {
        &self.created_at
    }
    fn set_created_at(&mut self, created_at: String) {
        self.created_at = created_at;
    }
    fn set_updated_at(&mut self, updated_at: Option<String>) {
        self.updated_at = updated_at;
    }
}

/// The wines a fresh install starts with.
pub fn default_wines() -> Vec<Wine> {
    let now = Utc::now().to_rfc3339();
    let wine = |id: &str, name: &str, year: &str, description: &str, price: &str,
                kind: WineKind, attributes: &[&str]| Wine {
        id: id.to_string(),
        name: name.to_string(),
        year: year.to_string(),
        description: description.to_string(),
        price: price.to_string(),
        image: "/placeholder.svg?height=400&width=300".to_string(),
        kind,
        attributes: attributes.iter().map(|a| a.to_string()).collect(),
        created_at: now.clone(),
        updated_at: None,
    };

    vec![
        wine(
            "1",
            "Tramín červený",
            "2021",
            "Ve vůni i chuti, tohoto vydařeného Tramínu, najdeme tóny citrusů, čajové \
             růže a liči. Barva zlatavá, vyvážený poměr kyseliny a zbytkového cukru \
             vytváří z tohoto vína jedinečný zážitek pro všechny milovníky aromatických \
             odrůd vín",
            "120 Kč",
            WineKind::Bile,
            &["polosuché", "aromatické"],
        ),
        wine(
            "2",
            "Frankovka",
            "2018",
            "Víno má jasně granátovou barvu s fialovými odlesky. Vůně je ovocná s aroma \
             drobného zahradního ovoce, jako jsou například višně a nebo černý bez.",
            "95 Kč",
            WineKind::Cervene,
            &["suché", "ovocné"],
        ),
        wine(
            "3",
            "Zweigeltrebe",
            "2018",
            "Víno granátové barvy s vůní červeného ovoce. V chuti dominují \
             alkoholizované višně. Plné harmonické víno s delší dochutí.",
            "95 Kč",
            WineKind::Cervene,
            &["suché", "plné"],
        ),
    ]
}

/// The news a fresh install starts with.
pub fn default_news() -> Vec<NewsItem> {
    let now = Utc::now().to_rfc3339();
    let article = |id: &str, date: &str, title: &str, content: &str, image_url: &str| NewsItem {
        id: id.to_string(),
        date: date.to_string(),
        title: title.to_string(),
        content: content.to_string(),
        image_url: image_url.to_string(),
        created_at: now.clone(),
        updated_at: None,
    };

    vec![
        article(
            "1",
            "10. 4. 2023",
            "Jarní otevřené sklepy 2023",
            "Zveme vás na tradiční jarní otevřené sklepy, které se konají 15. a 16. \
             dubna 2023. Ochutnáte nové ročníky našich vín a dozvíte se více o naší \
             práci ve vinicích.",
            "/vineyard-event.jpg",
        ),
        article(
            "2",
            "5. 3. 2023",
            "Nová vína v nabídce",
            "Do naší nabídky jsme nově zařadili Rulandské šedé 2022 a Pálavou 2022. \
             Vína jsou k dispozici v našem vinném sklepě.",
            "/new-wines.jpg",
        ),
        article(
            "3",
            "18. 2. 2023",
            "Ocenění na výstavě vín",
            "Náš Tramín červený 2021 získal zlatou medaili na regionální výstavě vín \
             v Dolních Kounicích. Děkujeme za podporu!",
            "/wine-awards.jpg",
        ),
    ]
}
