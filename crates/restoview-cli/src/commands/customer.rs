//! Customer commands
//!
//! Usage:
//!   restoview customer add <FIRST> <LAST>
//!   restoview customer list
//!   restoview customer reviews <ID>
//!   restoview customer restaurants <ID>
//!   restoview customer full-name <ID>
//!   restoview customer favorite <ID>
//!   restoview customer add-review <ID> <RATING> <RESTAURANT_ID>
//!   restoview customer delete-reviews <ID> <RESTAURANT_ID>
//!   restoview customer delete <ID>

use super::{require_customer, require_restaurant, CmdResult, Context};
use clap::{Args, Subcommand};
use restoview_core::errors::{ExError, RestoError};
use restoview_core::model::NewCustomer;
use restoview_store::queries::customer_queries;
use restoview_store::repo::CustomerRepo;

#[derive(Debug, Args)]
pub struct CustomerArgs {
    #[command(subcommand)]
    pub command: CustomerCommand,
}

#[derive(Debug, Subcommand)]
pub enum CustomerCommand {
    /// Create a customer
    Add { first_name: String, last_name: String },
    /// List every customer
    List,
    /// Ratings left by a customer
    Reviews { id: i64 },
    /// Names of the restaurants a customer reviewed
    Restaurants { id: i64 },
    /// "first last"
    FullName { id: i64 },
    /// Restaurant of the customer's highest-rated review
    Favorite { id: i64 },
    /// Leave a review for a restaurant
    AddReview {
        id: i64,
        #[arg(allow_negative_numbers = true)]
        rating: i64,
        restaurant_id: i64,
    },
    /// Remove every review the customer left for a restaurant
    DeleteReviews { id: i64, restaurant_id: i64 },
    /// Delete a customer (fails while reviews still reference it)
    Delete { id: i64 },
}

pub fn execute(args: CustomerArgs, ctx: &Context) -> CmdResult {
    let mut conn = ctx.open()?;

    match args.command {
        CustomerCommand::Add {
            first_name,
            last_name,
        } => {
            let customer = CustomerRepo::insert(&conn, &NewCustomer::new(first_name, last_name))?;
            if ctx.json {
                println!("{}", serde_json::to_string_pretty(&customer)?);
            } else {
                println!("✓ Added customer {}: {}", customer.id, customer);
            }
        }
        CustomerCommand::List => ctx.print_all(&CustomerRepo::list(&conn)?)?,
        CustomerCommand::Reviews { id } => {
            let customer = require_customer(&conn, id)?;
            ctx.print_all(&customer_queries::reviews(&conn, &customer)?)?;
        }
        CustomerCommand::Restaurants { id } => {
            let customer = require_customer(&conn, id)?;
            ctx.print_all(&customer_queries::customer_restaurants(&conn, &customer)?)?;
        }
        CustomerCommand::FullName { id } => {
            let customer = require_customer(&conn, id)?;
            ctx.print_one(Some(&customer.full_name()), "")?;
        }
        CustomerCommand::Favorite { id } => {
            let customer = require_customer(&conn, id)?;
            let favorite = customer_queries::favorite_restaurant(&conn, &customer)?;
            ctx.print_one(favorite.as_ref(), "No favorite restaurant found")?;
        }
        CustomerCommand::AddReview {
            id,
            rating,
            restaurant_id,
        } => {
            let customer = require_customer(&conn, id)?;
            let tx = conn.transaction().map_err(restoview_store::errors::from_rusqlite)?;
            let review = customer_queries::add_review(&tx, &customer, rating, restaurant_id)?;
            tx.commit().map_err(restoview_store::errors::from_rusqlite)?;
            if ctx.json {
                println!("{}", serde_json::to_string_pretty(&review)?);
            } else {
                println!("✓ Added review {}: {}", review.id, review);
            }
        }
        CustomerCommand::DeleteReviews { id, restaurant_id } => {
            let customer = require_customer(&conn, id)?;
            let restaurant = require_restaurant(&conn, restaurant_id)?;
            let tx = conn.transaction().map_err(restoview_store::errors::from_rusqlite)?;
            let removed = customer_queries::delete_reviews(&tx, &customer, &restaurant)?;
            tx.commit().map_err(restoview_store::errors::from_rusqlite)?;
            println!("✓ Deleted {} review(s)", removed);
        }
        CustomerCommand::Delete { id } => {
            if !CustomerRepo::delete(&conn, id)? {
                return Err(ExError::from(RestoError::CustomerNotFound { customer_id: id }).into());
            }
            println!("✓ Deleted customer {}", id);
        }
    }

    Ok(())
}
