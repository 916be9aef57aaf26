//! Predefined queries over the customers table.

/// A named query offered to users as a starting point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PresetQuery {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub query: &'static str,
}

/// Preset queries, in display order.
pub const PRESETS: &[PresetQuery] = &[
    PresetQuery {
        id: "all-customers",
        name: "All Customers",
        description: "Get all customer records",
        query: "SELECT * FROM customers;",
    },
    PresetQuery {
        id: "german-customers",
        name: "German Customers",
        description: "Customers from Germany",
        query: "SELECT customerID, companyName, contactName, city, phone FROM customers WHERE country = \"Germany\";",
    },
    PresetQuery {
        id: "by-country",
        name: "Customers by Country",
        description: "Customers sorted by country",
        query: "SELECT customerID, companyName, contactName, country, city FROM customers ORDER BY country;",
    },
    PresetQuery {
        id: "uk-france-customers",
        name: "UK/France Customers",
        description: "Customers from UK or France",
        query: "SELECT customerID, companyName, contactName, country, city, phone FROM customers WHERE country IN (\"UK\", \"France\");",
    },
    PresetQuery {
        id: "company-search",
        name: "Search by Company Name",
        description: "Search with partial company name",
        query: "SELECT * FROM customers WHERE companyName LIKE \"%market%\";",
    },
    PresetQuery {
        id: "limited-results",
        name: "Top 5 Customers",
        description: "First 5 customers in database",
        query: "SELECT customerID, companyName, contactName, country FROM customers LIMIT 5;",
    },
    // IS NULL is not a supported predicate, so this one returns every row.
    PresetQuery {
        id: "missing-fax",
        name: "Missing Fax Numbers",
        description: "Customers without fax numbers",
        query: "SELECT customerID, companyName, contactName, phone, fax FROM customers WHERE fax IS NULL;",
    },
];

/// Looks up a preset by id.
pub fn find(id: &str) -> Option<&'static PresetQuery> {
    PRESETS.iter().find(|p| p.id == id)
}
