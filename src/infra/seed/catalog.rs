use crate::domain::entities::product::{Product, ProductId};

pub const SAMPLE_SOURCE: &str = "builtin:sample-catalog";

const ITEMS: &[(&str, &str, f64, &str)] = &[
    ("Smartphone X", "smartphones", 699.0, "6.1-inch display, dual camera"),
    ("Smartphone X Pro", "smartphones", 999.0, "Triple camera with telephoto lens"),
    ("Pocket Phone Mini", "smartphones", 349.5, "Compact phone with all-day battery"),
    ("Tablet Air", "tablets", 549.0, "Lightweight tablet for reading and notes"),
    ("Tablet Max 12", "tablets", 899.99, "Large tablet with stylus support"),
    ("Laptop Studio 14", "laptops", 1299.0, "Thin laptop for creative work"),
    ("Laptop Go", "laptops", 649.0, "Everyday laptop with long battery life"),
    ("Noise-Cancelling Headphones", "audio", 249.0, "Over-ear, wireless, 30h battery"),
    ("Earbuds Lite", "audio", 59.9, "Wireless earbuds with charging case"),
    ("Bookshelf Speaker", "audio", 129.0, "Pair of compact passive speakers"),
    ("Smart Watch Sport", "wearables", 199.0, "Heart-rate and GPS tracking"),
    ("Fitness Band", "wearables", 49.0, "Sleep and step tracking"),
    ("Mechanical Keyboard", "accessories", 89.0, "Hot-swappable switches, RGB"),
    ("Wireless Mouse", "accessories", 25.5, "Ergonomic, silent clicks"),
    ("USB-C Hub", "accessories", 39.0, "HDMI, SD card and three USB ports"),
    ("Phone Case", "accessories", 15.0, "Shock-absorbing silicone case"),
    ("Crème Brûlée Torch", "kitchen", 32.0, "Butane torch for caramelizing"),
    ("Espresso Machine", "kitchen", 449.0, "15-bar pump with milk frother"),
    ("Électric Kettle", "kitchen", 45.0, "1.7 L stainless steel kettle"),
    ("Chef's Knife", "kitchen", 79.0, "20 cm forged steel blade"),
    ("Desk Lamp", "home", 34.99, "Dimmable LED with USB port"),
    ("Ergonomic Chair", "home", 329.0, "Adjustable lumbar support"),
    ("Standing Desk", "home", 499.0, "Electric height adjustment"),
    ("Air Purifier", "home", 189.0, "HEPA filter for rooms up to 40 m²"),
    ("Robot Vacuum", "home", 279.0, "Self-charging with app control"),
];

/// A fixed catalog used to seed an empty database. Items are repeated in
/// numbered editions so the table spans several pages.
pub fn sample_products() -> Vec<Product> {
    let mut products = Vec::with_capacity(ITEMS.len() * 3);
    for edition in 0..3_u32 {
        for (title, category, price, description) in ITEMS {
            let id = products.len() as i64 + 1;
            let title = if edition == 0 {
                (*title).to_string()
            } else {
                format!("{title} (Gen {})", edition + 1)
            };
            products.push(Product {
                id: ProductId(id),
                title,
                price: price + f64::from(edition) * 10.0,
                category: (*category).to_string(),
                description: (*description).to_string(),
            });
        }
    }
    products
}
