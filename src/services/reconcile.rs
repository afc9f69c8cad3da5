//! Client bookkeeping derived from orders.
//!
//! A client is identified by email. The first order from an address creates the
//! client with one order; every later order overwrites name, phone and company,
//! adds one to `total_orders` and moves `last_order_date` to the order's creation
//! time. The whole step is one `record_order` call, which each backend performs
//! atomically, so concurrent first orders cannot produce two rows.

use crate::ids;
use crate::models::{Client, ClientContact, Order};
use crate::store::{ClientStore, StoreResult};

pub fn contact_from_order(order: &Order) -> ClientContact {
    ClientContact {
        email: order.email.clone(),
        name: order.client_name.clone(),
        phone: order.phone.clone(),
        company: order.company.clone(),
    }
}

pub async fn reconcile<S>(store: &S, order: &Order) -> StoreResult<Client>
where
    S: ClientStore + ?Sized,
{
    let contact = contact_from_order(order);
    store
        .record_order(&ids::new_client_id(), &contact, order.created_at)
        .await
}
