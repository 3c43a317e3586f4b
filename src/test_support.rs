//! In-memory backend used by unit tests

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::domain::{ClientError, RentalBackend};
use crate::models::{
    Customer, CustomerRequest, Employee, Movie, MovieRequest, RentalRequest, RentalResponse,
    RentalStatus,
};

pub const RENTAL_DATE: &str = "2024-05-01";
pub const RETURN_DATE: &str = "2024-05-03";

#[derive(Default)]
pub struct FakeStore {
    pub movies: Vec<Movie>,
    pub customers: Vec<Customer>,
    pub rentals: Vec<RentalResponse>,
    pub employees: Vec<Employee>,
    calls: Vec<String>,
    failures: HashMap<&'static str, (u16, String)>,
    next_id: i64,
}

#[derive(Default)]
pub struct FakeBackend {
    store: Mutex<FakeStore>,
}

impl FakeBackend {
    pub fn new() -> Self {
        let backend = Self::default();
        backend.store.lock().unwrap().next_id = 100;
        backend
    }

    pub fn seed(self, f: impl FnOnce(&mut FakeStore)) -> Self {
        f(&mut self.store.lock().unwrap());
        self
    }

    /// Make every call to `op` fail with the given status and message
    pub fn fail(&self, op: &'static str, status: u16, message: &str) {
        self.store
            .lock()
            .unwrap()
            .failures
            .insert(op, (status, message.to_string()));
    }

    pub fn calls(&self) -> Vec<String> {
        self.store.lock().unwrap().calls.clone()
    }

    /// Calls other than list and lookup operations
    pub fn mutations(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter(|c| !c.starts_with("list_") && !c.starts_with("find_"))
            .collect()
    }

    fn enter(&self, op: &'static str, call: String) -> Result<(), ClientError> {
        let mut store = self.store.lock().unwrap();
        store.calls.push(call);
        match store.failures.get(op) {
            Some((status, message)) => Err(ClientError::Api {
                status: *status,
                message: message.clone(),
                details: Some(serde_json::json!({ "message": message })),
            }),
            None => Ok(()),
        }
    }
}

pub fn movie(id: i64, title: &str, copies: i32) -> Movie {
    Movie {
        id,
        title: title.to_string(),
        genre: "Drama".to_string(),
        release_year: 2002,
        available_copies: copies,
        director: "Fernando Meirelles".to_string(),
    }
}

pub fn customer(id: i64, name: &str) -> Customer {
    Customer {
        id,
        name: name.to_string(),
        email: format!("{}@x.com", name.to_lowercase()),
        phone: "(11) 91234-5678".to_string(),
    }
}

pub fn employee(id: i64, name: &str) -> Employee {
    Employee {
        id,
        name: name.to_string(),
        email: format!("{}@loja.com", name.to_lowercase()),
        role: "CLERK".to_string(),
    }
}

fn not_found(what: &str) -> ClientError {
    ClientError::Api {
        status: 404,
        message: format!("{} not found", what),
        details: None,
    }
}

#[async_trait]
impl RentalBackend for FakeBackend {
    async fn list_movies(&self) -> Result<Vec<Movie>, ClientError> {
        self.enter("list_movies", "list_movies".to_string())?;
        Ok(self.store.lock().unwrap().movies.clone())
    }

    async fn list_customers(&self) -> Result<Vec<Customer>, ClientError> {
        self.enter("list_customers", "list_customers".to_string())?;
        Ok(self.store.lock().unwrap().customers.clone())
    }

    async fn list_rentals(&self) -> Result<Vec<RentalResponse>, ClientError> {
        self.enter("list_rentals", "list_rentals".to_string())?;
        Ok(self.store.lock().unwrap().rentals.clone())
    }

    async fn list_employees(&self) -> Result<Vec<Employee>, ClientError> {
        self.enter("list_employees", "list_employees".to_string())?;
        Ok(self.store.lock().unwrap().employees.clone())
    }

    async fn create_movie(&self, movie: &MovieRequest) -> Result<(), ClientError> {
        self.enter("create_movie", format!("create_movie({})", movie.title))?;
        let mut store = self.store.lock().unwrap();
        store.next_id += 1;
        let id = store.next_id;
        store.movies.push(Movie {
            id,
            title: movie.title.clone(),
            genre: movie.genre.clone(),
            release_year: movie.release_year,
            available_copies: movie.available_copies,
            director: movie.director.clone(),
        });
        Ok(())
    }

    async fn create_customer(&self, customer: &CustomerRequest) -> Result<(), ClientError> {
        self.enter(
            "create_customer",
            format!(
                "create_customer({}, {}, {})",
                customer.name, customer.email, customer.phone
            ),
        )?;
        let mut store = self.store.lock().unwrap();
        store.next_id += 1;
        let id = store.next_id;
        store.customers.push(Customer {
            id,
            name: customer.name.clone(),
            email: customer.email.clone(),
            phone: customer.phone.clone(),
        });
        Ok(())
    }

    async fn create_rental(&self, rental: &RentalRequest) -> Result<(), ClientError> {
        self.enter(
            "create_rental",
            format!(
                "create_rental({}, {}, {})",
                rental.customer_id, rental.movie_id, rental.employee_id
            ),
        )?;
        let mut store = self.store.lock().unwrap();
        store.next_id += 1;
        let id = store.next_id;
        store.rentals.push(RentalResponse {
            id,
            movie_id: rental.movie_id,
            customer_id: rental.customer_id,
            employee_id: rental.employee_id,
            rental_date: RENTAL_DATE.to_string(),
            return_date: None,
            status: RentalStatus::Open,
        });
        Ok(())
    }

    async fn delete_movie(&self, id: i64) -> Result<(), ClientError> {
        self.enter("delete_movie", format!("delete_movie({})", id))?;
        self.store.lock().unwrap().movies.retain(|m| m.id != id);
        Ok(())
    }

    async fn delete_customer(&self, id: i64) -> Result<(), ClientError> {
        self.enter("delete_customer", format!("delete_customer({})", id))?;
        self.store.lock().unwrap().customers.retain(|c| c.id != id);
        Ok(())
    }

    async fn find_customer_by_email(&self, email: &str) -> Result<Option<Customer>, ClientError> {
        self.enter(
            "find_customer_by_email",
            format!("find_customer_by_email({})", email),
        )?;
        let store = self.store.lock().unwrap();
        Ok(store.customers.iter().find(|c| c.email == email).cloned())
    }

    async fn find_customer_by_phone(&self, phone: &str) -> Result<Option<Customer>, ClientError> {
        self.enter(
            "find_customer_by_phone",
            format!("find_customer_by_phone({})", phone),
        )?;
        let store = self.store.lock().unwrap();
        Ok(store.customers.iter().find(|c| c.phone == phone).cloned())
    }

    async fn return_rental(&self, id: i64) -> Result<(), ClientError> {
        self.enter("return_rental", format!("return_rental({})", id))?;
        let mut store = self.store.lock().unwrap();
        let rental = store
            .rentals
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| not_found("Rental"))?;
        rental.status = RentalStatus::Returned;
        rental.return_date = Some(RETURN_DATE.to_string());
        Ok(())
    }

    async fn increase_copies(&self, id: i64, amount: u32) -> Result<(), ClientError> {
        self.enter("increase_copies", format!("increase_copies({}, {})", id, amount))?;
        let mut store = self.store.lock().unwrap();
        let movie = store
            .movies
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or_else(|| not_found("Movie"))?;
        movie.available_copies += amount as i32;
        Ok(())
    }

    async fn decrease_copies(&self, id: i64, amount: u32) -> Result<(), ClientError> {
        self.enter("decrease_copies", format!("decrease_copies({}, {})", id, amount))?;
        let mut store = self.store.lock().unwrap();
        let movie = store
            .movies
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or_else(|| not_found("Movie"))?;
        if movie.available_copies < amount as i32 {
            return Err(ClientError::Api {
                status: 400,
                message: "Not enough copies".to_string(),
                details: None,
            });
        }
        movie.available_copies -= amount as i32;
        Ok(())
    }
}
