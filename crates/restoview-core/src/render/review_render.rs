use crate::model::{Customer, Restaurant};

/// Render one review as a sentence
///
/// `"Review for {restaurant} by {customer full name}: {rating} stars."`
pub fn full_review(restaurant: &Restaurant, customer: &Customer, rating: i64) -> String {
    format!(
        "Review for {} by {}: {} stars.",
        restaurant.name,
        customer.full_name(),
        rating
    )
}

/// Describe the customer resolved for a review, or say that none exists
pub fn describe_customer(customer: Option<&Customer>) -> String {
    match customer {
        Some(c) => format!("Customer is {} {}", c.first_name, c.last_name),
        None => "Customer for the specified id doesn't exist".to_string(),
    }
}

/// Describe the restaurant resolved for a review, or say that none exists
pub fn describe_restaurant(restaurant: Option<&Restaurant>) -> String {
    match restaurant {
        Some(r) => format!("Restaurant is {}", r.name),
        None => "Restaurant for the specified id doesn't exist".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{NewCustomer, NewRestaurant};
    use proptest::prelude::*;

    #[test]
    fn test_full_review_sentence() {
        let restaurant = NewRestaurant::new("Sushi Place", 30).with_id(1);
        let customer = NewCustomer::new("Jane", "Doe").with_id(1);

        assert_eq!(
            full_review(&restaurant, &customer, 4),
            "Review for Sushi Place by Jane Doe: 4 stars."
        );
    }

    #[test]
    fn test_describe_missing() {
        assert_eq!(
            describe_customer(None),
            "Customer for the specified id doesn't exist"
        );
        assert_eq!(
            describe_restaurant(None),
            "Restaurant for the specified id doesn't exist"
        );
    }

    #[test]
    fn test_describe_found() {
        let restaurant = NewRestaurant::new("Ichiraku", 2).with_id(4);
        let customer = NewCustomer::new("kisuke", "urahara").with_id(8);

        assert_eq!(
            describe_customer(Some(&customer)),
            "Customer is kisuke urahara"
        );
        assert_eq!(
            describe_restaurant(Some(&restaurant)),
            "Restaurant is Ichiraku"
        );
    }

    proptest! {
        #[test]
        fn full_review_embeds_every_part(
            name in "[A-Za-z ]{1,20}",
            first in "[A-Za-z]{1,10}",
            last in "[A-Za-z]{1,10}",
            rating in any::<i64>(),
        ) {
            let restaurant = NewRestaurant::new(name.clone(), 1).with_id(1);
            let customer = NewCustomer::new(first.clone(), last.clone()).with_id(1);
            let rendered = full_review(&restaurant, &customer, rating);

            let expected_prefix = format!("Review for {} by {} {}: ", name, first, last);
            prop_assert!(rendered.starts_with(&expected_prefix));
            let expected_suffix = format!("{} stars.", rating);
            prop_assert!(rendered.ends_with(&expected_suffix));
        }
    }
}
