//! Inventory menu

use std::io::{BufRead, Write};

use stockroom_domain::{Product, ProductField, ProductPatch, RecordRepository};
use tracing::info;

use super::{Flow, Menu, NumberInput, Prompter};

const OPTIONS: &[&str] = &[
    "Show all products",
    "Add a product",
    "Remove a product",
    "Edit a product's name, price or count",
    "Find a product by name",
    "List products at or below a price",
    "List products at or below a count",
    "Exit",
];

/// Menu over a product repository
pub struct InventoryMenu<R> {
    repo: R,
}

impl<R: RecordRepository<Product>> InventoryMenu<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    fn show<I: BufRead, O: Write>(&self, io: &mut Prompter<I, O>) -> anyhow::Result<()> {
        let products = self.repo.list();
        if products.is_empty() {
            io.say("The inventory is empty.")?;
            return Ok(());
        }

        print_products(io, &products)?;
        io.say(format_args!("Total products: {}", products.len()))?;
        Ok(())
    }

    fn add<I: BufRead, O: Write>(&mut self, io: &mut Prompter<I, O>) -> anyhow::Result<()> {
        let Some(name) = io.ask("Product name: ")? else {
            return Ok(());
        };
        let Some(price) = io.ask_number("Price: ")?.required(io)? else {
            return Ok(());
        };
        let Some(count) = io.ask_number("Count: ")?.required(io)? else {
            return Ok(());
        };

        let product = Product::new(&name, price, count);
        let shown = product.name().to_string();
        match self.repo.append(product) {
            Ok(total) => {
                info!(name = %shown, total, "product added");
                io.success(format_args!("Added {}.", shown))?;
            }
            Err(err) => io.recover(err)?,
        }
        Ok(())
    }

    fn remove<I: BufRead, O: Write>(&mut self, io: &mut Prompter<I, O>) -> anyhow::Result<()> {
        let Some(name) = io.ask("Product name: ")? else {
            return Ok(());
        };
        let name = name.trim();

        match self.repo.remove_by_key(name) {
            Ok(removed) if removed.is_empty() => {
                io.say(format_args!("No product named '{}'.", name))?;
            }
            Ok(removed) => {
                info!(name, removed = removed.len(), "products removed");
                io.success(format_args!("Removed {} product(s) named '{}'.", removed.len(), name))?;
            }
            Err(err) => io.recover(err)?,
        }
        Ok(())
    }

    fn edit<I: BufRead, O: Write>(&mut self, io: &mut Prompter<I, O>) -> anyhow::Result<()> {
        let Some(name) = io.ask("Product name: ")? else {
            return Ok(());
        };
        let name = name.trim();

        let matches = self.repo.find_by_key(name);
        let Some(current) = matches.first() else {
            io.say(format_args!("No product named '{}'.", name))?;
            return Ok(());
        };
        if matches.len() > 1 {
            io.say(format_args!(
                "{} products are named '{}'; the changes apply to all of them.",
                matches.len(),
                name
            ))?;
        }
        io.say("Leave a field blank to keep its current value.")?;

        let Some(new_name) = io.ask(format_args!("New name [{}]: ", current.name()))? else {
            return Ok(());
        };
        let price = match io.ask_number(format_args!("New price [{}]: ", current.price()))? {
            NumberInput::Value(n) => Some(n),
            NumberInput::Blank => None,
            NumberInput::Invalid | NumberInput::Closed => return Ok(()),
        };
        let count = match io.ask_number(format_args!("New count [{}]: ", current.count()))? {
            NumberInput::Value(n) => Some(n),
            NumberInput::Blank => None,
            NumberInput::Invalid | NumberInput::Closed => return Ok(()),
        };

        let patch = ProductPatch {
            name: Some(new_name),
            price,
            count,
        };
        if patch.is_empty() {
            io.say("Nothing changed.")?;
            return Ok(());
        }

        match self.repo.update_by_key(name, &patch) {
            Ok(updated) => {
                info!(name, updated, "products updated");
                io.success(format_args!("Updated {} product(s).", updated))?;
            }
            Err(err) => io.recover(err)?,
        }
        Ok(())
    }

    fn find<I: BufRead, O: Write>(&self, io: &mut Prompter<I, O>) -> anyhow::Result<()> {
        let Some(name) = io.ask("Product name: ")? else {
            return Ok(());
        };
        let name = name.trim();

        let found = self.repo.find_by_key(name);
        if found.is_empty() {
            io.say(format_args!("No product named '{}'.", name))?;
        } else {
            print_products(io, &found)?;
        }
        Ok(())
    }

    fn at_most<I: BufRead, O: Write>(
        &self,
        io: &mut Prompter<I, O>,
        field: ProductField,
    ) -> anyhow::Result<()> {
        let Some(limit) = io
            .ask_number(format_args!("Maximum {}: ", field))?
            .required(io)?
        else {
            return Ok(());
        };

        let found = self.repo.find_by_threshold(field, limit);
        if found.is_empty() {
            io.say(format_args!("No products with {} at or below {}.", field, limit))?;
        } else {
            print_products(io, &found)?;
        }
        Ok(())
    }
}

impl<R: RecordRepository<Product>> Menu for InventoryMenu<R> {
    const TITLE: &'static str = "Inventory";

    fn options(&self) -> &'static [&'static str] {
        OPTIONS
    }

    fn dispatch<I: BufRead, O: Write>(
        &mut self,
        choice: &str,
        io: &mut Prompter<I, O>,
    ) -> anyhow::Result<Flow> {
        match choice {
            "1" => self.show(io)?,
            "2" => self.add(io)?,
            "3" => self.remove(io)?,
            "4" => self.edit(io)?,
            "5" => self.find(io)?,
            "6" => self.at_most(io, ProductField::Price)?,
            "7" => self.at_most(io, ProductField::Count)?,
            "8" => {
                io.say("Goodbye!")?;
                return Ok(Flow::Exit);
            }
            _ => io.error(format_args!("Invalid choice '{}', try again.", choice))?,
        }
        Ok(Flow::Continue)
    }
}

fn print_products<I: BufRead, O: Write>(
    io: &mut Prompter<I, O>,
    products: &[Product],
) -> std::io::Result<()> {
    for product in products {
        io.say(product)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::run_menu;
    use crate::menu::test_support::{printed, prompter};
    use stockroom_adapter::InMemoryRepository;

    fn stocked() -> InMemoryRepository<Product> {
        InMemoryRepository::with_records(vec![
            Product::new("Pen", 2, 10),
            Product::new("Book", 15, 3),
        ])
    }

    /// Run the menu over `repo` with `input` and return what was printed
    fn session(repo: &InMemoryRepository<Product>, input: &str) -> String {
        let mut menu = InventoryMenu::new(repo.clone());
        let mut io = prompter(input);
        run_menu(&mut menu, &mut io).unwrap();
        printed(io)
    }

    // ============== Listing ==============

    #[test]
    fn test_show_lists_products_and_total() {
        let out = session(&stocked(), "1\n8\n");

        assert!(out.contains("Product: Pen Price: 2 Count: 10"));
        assert!(out.contains("Product: Book Price: 15 Count: 3"));
        assert!(out.contains("Total products: 2"));
        assert!(out.contains("Goodbye!"));
    }

    #[test]
    fn test_show_empty_inventory() {
        let out = session(&InMemoryRepository::new(), "1\n");
        assert!(out.contains("The inventory is empty."));
    }

    // ============== Adding ==============

    #[test]
    fn test_add_product() {
        let repo = InMemoryRepository::with_records(vec![Product::new("Pen", 2, 10)]);

        let out = session(&repo, "2\nbook\n15\n3\n8\n");

        assert!(out.contains("Added Book."));
        assert_eq!(
            repo.list(),
            vec![Product::new("Pen", 2, 10), Product::new("Book", 15, 3)]
        );
    }

    #[test]
    fn test_add_rejects_non_numeric_price() {
        let repo = stocked();

        let out = session(&repo, "2\nEraser\ncheap\n1\n");

        assert!(out.contains("'cheap' is not a whole number."));
        assert_eq!(repo.count(), 2);
        // The loop carried on and showed the list afterwards
        assert!(out.contains("Total products: 2"));
    }

    #[test]
    fn test_add_rejects_blank_name() {
        let repo = stocked();

        let out = session(&repo, "2\n   \n1\n1\n");

        assert!(out.contains("Invalid name: must not be empty"));
        assert_eq!(repo.count(), 2);
    }

    // ============== Removing ==============

    #[test]
    fn test_remove_ignores_case() {
        let repo = stocked();

        let out = session(&repo, "3\nPEN\n");

        assert!(out.contains("Removed 1 product(s) named 'PEN'."));
        assert_eq!(repo.list(), vec![Product::new("Book", 15, 3)]);
    }

    #[test]
    fn test_remove_unknown_product() {
        let repo = stocked();

        let out = session(&repo, "3\nStapler\n");

        assert!(out.contains("No product named 'Stapler'."));
        assert_eq!(repo.count(), 2);
    }

    // ============== Editing ==============

    #[test]
    fn test_edit_blank_answers_keep_values() {
        let repo = stocked();

        let out = session(&repo, "4\npen\n\n4\n\n");

        assert!(out.contains("New name [Pen]: "));
        assert!(out.contains("Updated 1 product(s)."));
        assert_eq!(repo.find_by_key("pen"), vec![Product::new("Pen", 4, 10)]);
    }

    #[test]
    fn test_edit_renames() {
        let repo = stocked();

        session(&repo, "4\nbook\nnotebook\n\n\n");

        assert!(repo.find_by_key("book").is_empty());
        assert_eq!(repo.find_by_key("Notebook"), vec![Product::new("Notebook", 15, 3)]);
    }

    #[test]
    fn test_edit_nothing_changed() {
        let repo = stocked();

        let out = session(&repo, "4\nPen\n\n\n\n");

        assert!(out.contains("Nothing changed."));
    }

    #[test]
    fn test_edit_invalid_count_aborts() {
        let repo = stocked();

        let out = session(&repo, "4\nPen\nGel Pen\n3\nmany\n");

        assert!(out.contains("'many' is not a whole number."));
        assert_eq!(repo.find_by_key("Pen"), vec![Product::new("Pen", 2, 10)]);
    }

    #[test]
    fn test_edit_unknown_product() {
        let out = session(&stocked(), "4\nStapler\n");
        assert!(out.contains("No product named 'Stapler'."));
    }

    // ============== Queries ==============

    #[test]
    fn test_find_by_name() {
        let out = session(&stocked(), "5\nbook\n");

        assert!(out.contains("Product: Book Price: 15 Count: 3"));
        assert!(!out.contains("Product: Pen"));
    }

    #[test]
    fn test_price_threshold_is_inclusive() {
        let out = session(&stocked(), "6\n2\n");

        assert!(out.contains("Product: Pen Price: 2 Count: 10"));
        assert!(!out.contains("Product: Book"));
    }

    #[test]
    fn test_count_threshold_none_found() {
        let out = session(&stocked(), "7\n1\n");
        assert!(out.contains("No products with count at or below 1."));
    }

    // ============== Dispatch ==============

    #[test]
    fn test_invalid_choice_leaves_store_unchanged() {
        let repo = stocked();

        let out = session(&repo, "9\nabc\n8\n");

        assert!(out.contains("Invalid choice '9', try again."));
        assert!(out.contains("Invalid choice 'abc', try again."));
        assert_eq!(repo.count(), 2);
    }

    #[test]
    fn test_add_over_unreadable_store_keeps_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("inventory.json");
        let original = r#"["Pen", 2, 10]"#;
        std::fs::write(&path, original).unwrap();
        let mut menu = InventoryMenu::new(stockroom_adapter::JsonFileRepository::new(&path));
        let mut io = prompter("2\nbook\n15\n3\n8\n");

        run_menu(&mut menu, &mut io).unwrap();

        let out = printed(io);
        assert!(out.contains("Stored records cannot be read, leaving them untouched"));
        assert!(out.contains("Goodbye!"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), original);
    }
}
