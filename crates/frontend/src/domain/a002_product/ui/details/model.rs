use contracts::domain::a001_category::CategoryId;
use contracts::domain::a002_product::{Product, ProductId, ProductPayload};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("Informe o nome do produto.")]
    EmptyName,
    #[error("Preço inválido.")]
    InvalidPrice,
    #[error("Selecione uma categoria.")]
    MissingCategory,
}

/// Editable copy of a product, as typed in the form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductDraft {
    /// None while creating a new product
    pub id: Option<ProductId>,
    pub name: String,
    pub price: String,
    pub category_id: Option<CategoryId>,
}

impl ProductDraft {
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: Some(product.id),
            name: product.name.clone(),
            price: product.price.to_string(),
            category_id: Some(product.category_id),
        }
    }

    /// Validated request body. Accepts `12.5` as well as `12,5`.
    pub fn to_payload(&self) -> Result<ProductPayload, DraftError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(DraftError::EmptyName);
        }
        let price = parse_price(&self.price).ok_or(DraftError::InvalidPrice)?;
        let category_id = self.category_id.ok_or(DraftError::MissingCategory)?;
        Ok(ProductPayload {
            name: name.to_string(),
            price,
            category_id,
        })
    }
}

fn parse_price(text: &str) -> Option<f64> {
    let value: f64 = text.trim().replace(',', ".").parse().ok()?;
    (value.is_finite() && value >= 0.0).then_some(value)
}

/// Why a save did not start
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveBlocked {
    /// No product is being edited
    Closed,
    /// A `PUT` for this session is still in flight
    InFlight,
    Invalid(DraftError),
}

/// Edit-in-place session for one catalog row.
///
/// A save sends one `PUT`. Success ends the session and asks the list to
/// refetch once; failure keeps the draft as typed and records the error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditSession {
    /// None when nothing is being edited
    pub draft: Option<ProductDraft>,
    pub saving: bool,
    pub error: Option<String>,
}

impl EditSession {
    pub fn open(&mut self, product: &Product) {
        self.draft = Some(ProductDraft::from_product(product));
        self.saving = false;
        self.error = None;
    }

    pub fn is_open(&self) -> bool {
        self.draft.is_some()
    }

    /// Ends the session without saving. Refused while a save is in flight.
    pub fn close(&mut self) -> bool {
        if self.saving {
            return false;
        }
        self.draft = None;
        self.error = None;
        true
    }

    /// Stores the typed values and returns the request to send.
    pub fn begin_save(&mut self, edited: ProductDraft) -> Result<(ProductId, ProductPayload), SaveBlocked> {
        if self.saving {
            return Err(SaveBlocked::InFlight);
        }
        let id = self
            .draft
            .as_ref()
            .and_then(|d| d.id)
            .ok_or(SaveBlocked::Closed)?;
        let draft = ProductDraft { id: Some(id), ..edited };
        let payload = draft.to_payload();
        self.draft = Some(draft);
        match payload {
            Ok(payload) => {
                self.saving = true;
                self.error = None;
                Ok((id, payload))
            }
            Err(e) => {
                self.error = Some(e.to_string());
                Err(SaveBlocked::Invalid(e))
            }
        }
    }

    /// Applies the `PUT` outcome. Returns `true` when the list must refetch.
    pub fn finish_save(&mut self, result: Result<(), String>) -> bool {
        if !self.saving {
            return false;
        }
        self.saving = false;
        match result {
            Ok(()) => {
                self.draft = None;
                self.error = None;
                true
            }
            Err(message) => {
                self.error = Some(message);
                false
            }
        }
    }
}

/// Parses a `<select>` value holding a category id. Empty means none.
pub fn parse_category_id(value: &str) -> Option<CategoryId> {
    value.trim().parse().ok()
}
