use pizza_catalog::{BaseVariant, Topping};
use pizza_core::PaymentMethod;

pub const CHOICE_PROMPT: &str = "Enter the number of your choice: ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseChoice {
    Pizza(BaseVariant),
    Exit,
    Invalid,
}

impl BaseChoice {
    pub fn parse(input: &str) -> Self {
        match input.trim() {
            "0" => BaseChoice::Exit,
            "1" => BaseChoice::Pizza(BaseVariant::Margherita),
            "2" => BaseChoice::Pizza(BaseVariant::Pepperoni),
            _ => BaseChoice::Invalid,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToppingChoice {
    Add(Topping),
    Finish,
    Invalid,
}

impl ToppingChoice {
    pub fn parse(input: &str) -> Self {
        match input.trim() {
            "1" => ToppingChoice::Add(Topping::Cheese),
            "2" => ToppingChoice::Add(Topping::Olives),
            "3" => ToppingChoice::Add(Topping::Mushrooms),
            "4" => ToppingChoice::Finish,
            _ => ToppingChoice::Invalid,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentChoice {
    Method(PaymentMethod),
    /// Anything unrecognized settles in cash without a dispatcher call
    Cash,
}

impl PaymentChoice {
    pub fn parse(input: &str) -> Self {
        match input.trim() {
            "1" => PaymentChoice::Method(PaymentMethod::PayPal),
            "2" => PaymentChoice::Method(PaymentMethod::CreditCard),
            _ => PaymentChoice::Cash,
        }
    }
}

pub fn base_menu() -> String {
    let mut menu = String::from("Choose your base pizza:\n");
    for (i, variant) in BaseVariant::ALL.iter().enumerate() {
        menu.push_str(&format!("{}. {} ({})\n", i + 1, variant, variant.price()));
    }
    menu.push_str("0 => to exit\n");
    menu
}

pub fn topping_menu() -> String {
    let mut menu = String::from("\nAvailable toppings:\n");
    for (i, topping) in Topping::ALL.iter().enumerate() {
        menu.push_str(&format!("{}. {} ({})\n", i + 1, topping, topping.price()));
    }
    menu.push_str(&format!("{}. Finish order\n", Topping::ALL.len() + 1));
    menu
}

pub fn payment_menu() -> String {
    format!(
        "\nChoose payment method:\n1. {}\n2. {}\n",
        PaymentMethod::PayPal,
        PaymentMethod::CreditCard
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_choice() {
        assert_eq!(BaseChoice::parse("0"), BaseChoice::Exit);
        assert_eq!(BaseChoice::parse(" 1\n"), BaseChoice::Pizza(BaseVariant::Margherita));
        assert_eq!(BaseChoice::parse("2"), BaseChoice::Pizza(BaseVariant::Pepperoni));
        assert_eq!(BaseChoice::parse("3"), BaseChoice::Invalid);
        assert_eq!(BaseChoice::parse(""), BaseChoice::Invalid);
    }

    #[test]
    fn test_topping_choice() {
        assert_eq!(ToppingChoice::parse("3"), ToppingChoice::Add(Topping::Mushrooms));
        assert_eq!(ToppingChoice::parse("4"), ToppingChoice::Finish);
        assert_eq!(ToppingChoice::parse("cheese"), ToppingChoice::Invalid);
    }

    #[test]
    fn test_payment_choice_falls_back_to_cash() {
        assert_eq!(PaymentChoice::parse("1"), PaymentChoice::Method(PaymentMethod::PayPal));
        assert_eq!(PaymentChoice::parse("2"), PaymentChoice::Method(PaymentMethod::CreditCard));
        assert_eq!(PaymentChoice::parse("3"), PaymentChoice::Cash);
    }

    #[test]
    fn test_menus_show_prices() {
        assert_eq!(
            base_menu(),
            "Choose your base pizza:\n1. Margherita ($5.00)\n2. Pepperoni ($6.00)\n0 => to exit\n"
        );
        let toppings = topping_menu();
        assert!(toppings.contains("1. Cheese ($1.00)"));
        assert!(toppings.contains("2. Olives ($0.50)"));
        assert!(toppings.contains("3. Mushrooms ($0.70)"));
        assert!(toppings.ends_with("4. Finish order\n"));
        assert!(payment_menu().contains("2. Credit Card"));
    }
}
