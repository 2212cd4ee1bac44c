//! Review lookup commands
//!
//! A review id that matches nothing is reported, not treated as an error.

use super::{CmdResult, Context};
use clap::{Args, Subcommand};
use restoview_core::render::{describe_customer, describe_restaurant};
use restoview_store::queries::review_queries;
use restoview_store::repo::ReviewRepo;

#[derive(Debug, Args)]
pub struct ReviewArgs {
    #[command(subcommand)]
    pub command: ReviewCommand,
}

#[derive(Debug, Subcommand)]
pub enum ReviewCommand {
    /// Customer who left a review
    Customer { id: i64 },
    /// Restaurant a review is about
    Restaurant { id: i64 },
    /// The review as a sentence
    Full { id: i64 },
}

pub fn execute(args: ReviewArgs, ctx: &Context) -> CmdResult {
    let conn = ctx.open()?;

    match args.command {
        ReviewCommand::Customer { id } => {
            let customer = review_queries::customer(&conn, id)?;
            if ctx.json {
                println!("{}", serde_json::to_string_pretty(&customer)?);
            } else {
                println!("{}", describe_customer(customer.as_ref()));
            }
        }
        ReviewCommand::Restaurant { id } => {
            let restaurant = review_queries::restaurant(&conn, id)?;
            if ctx.json {
                println!("{}", serde_json::to_string_pretty(&restaurant)?);
            } else {
                println!("{}", describe_restaurant(restaurant.as_ref()));
            }
        }
        ReviewCommand::Full { id } => {
            let review = ReviewRepo::get(&conn, id)?;
            let sentence = match review {
                Some(review) => Some(review_queries::full_review(&conn, &review)?),
                None => None,
            };
            ctx.print_one(sentence.as_ref(), "Review for the specified id doesn't exist")?;
        }
    }

    Ok(())
}
