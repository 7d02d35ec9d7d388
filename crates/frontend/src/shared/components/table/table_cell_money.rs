//! Table cell for money values
//!
//! ```ignore
//! <TableCellMoney value=product.price />
//! ```

use super::number_format::format_money;
use leptos::prelude::*;
use thaw::*;

/// Right-aligned `R$` amount.
#[component]
pub fn TableCellMoney(value: f64) -> impl IntoView {
    view! {
        <TableCell>
            <div style="text-align: right; font-variant-numeric: tabular-nums;">
                {format_money(value)}
            </div>
        </TableCell>
    }
}
