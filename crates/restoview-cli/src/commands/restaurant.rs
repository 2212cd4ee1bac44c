//! Restaurant commands
//!
//! Usage:
//!   restoview restaurant add <NAME> <PRICE>
//!   restoview restaurant list
//!   restoview restaurant reviews <ID>
//!   restoview restaurant customers <ID>
//!   restoview restaurant all-reviews <ID>
//!   restoview restaurant fanciest
//!   restoview restaurant delete <ID>

use super::{require_restaurant, CmdResult, Context};
use clap::{Args, Subcommand};
use restoview_core::errors::{ExError, RestoError};
use restoview_core::model::NewRestaurant;
use restoview_store::queries::restaurant_queries;
use restoview_store::repo::RestaurantRepo;

#[derive(Debug, Args)]
pub struct RestaurantArgs {
    #[command(subcommand)]
    pub command: RestaurantCommand,
}

#[derive(Debug, Subcommand)]
pub enum RestaurantCommand {
    /// Create a restaurant
    Add {
        name: String,
        #[arg(allow_negative_numbers = true)]
        price: i64,
    },
    /// List every restaurant
    List,
    /// Reviews left for a restaurant
    Reviews { id: i64 },
    /// First names of the customers who reviewed a restaurant
    Customers { id: i64 },
    /// Review sentences for a restaurant
    AllReviews { id: i64 },
    /// The most expensive restaurant
    Fanciest,
    /// Delete a restaurant (fails while reviews still reference it)
    Delete { id: i64 },
}

pub fn execute(args: RestaurantArgs, ctx: &Context) -> CmdResult {
    let conn = ctx.open()?;

    match args.command {
        RestaurantCommand::Add { name, price } => {
            let restaurant = RestaurantRepo::insert(&conn, &NewRestaurant::new(name, price))?;
            if ctx.json {
                println!("{}", serde_json::to_string_pretty(&restaurant)?);
            } else {
                println!("✓ Added restaurant {}: {}", restaurant.id, restaurant);
            }
        }
        RestaurantCommand::List => ctx.print_all(&RestaurantRepo::list(&conn)?)?,
        RestaurantCommand::Reviews { id } => {
            let restaurant = require_restaurant(&conn, id)?;
            ctx.print_all(&restaurant_queries::reviews(&conn, &restaurant)?)?;
        }
        RestaurantCommand::Customers { id } => {
            let restaurant = require_restaurant(&conn, id)?;
            ctx.print_all(&restaurant_queries::restaurant_customers(&conn, &restaurant)?)?;
        }
        RestaurantCommand::AllReviews { id } => {
            let restaurant = require_restaurant(&conn, id)?;
            ctx.print_all(&restaurant_queries::all_reviews(&conn, &restaurant)?)?;
        }
        RestaurantCommand::Fanciest => {
            let fanciest = restaurant_queries::fanciest(&conn)?;
            ctx.print_one(fanciest.as_ref(), "No restaurants found")?;
        }
        RestaurantCommand::Delete { id } => {
            if !RestaurantRepo::delete(&conn, id)? {
                return Err(
                    ExError::from(RestoError::RestaurantNotFound { restaurant_id: id }).into(),
                );
            }
            println!("✓ Deleted restaurant {}", id);
        }
    }

    Ok(())
}
