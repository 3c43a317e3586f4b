use crate::domain::RentalBackend;
use crate::models::Customer;
use crate::services::ConsoleState;

pub const EMPTY: &str = "No customers yet.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CustomerAction {
    Delete(i64),
}

impl CustomerAction {
    pub async fn dispatch<B: RentalBackend>(self, state: &mut ConsoleState<B>) {
        match self {
            CustomerAction::Delete(id) => state.delete_customer(id).await,
        }
    }
}

pub fn render_customers(customers: &[Customer]) -> String {
    if customers.is_empty() {
        return format!("{}\n", EMPTY);
    }

    let mut out = String::new();
    for customer in customers {
        out.push_str(&format!("#{} {}  [del]\n", customer.id, customer.name));
        out.push_str(&format!("    {} • {}\n", customer.email, customer.phone));
    }
    out
}
