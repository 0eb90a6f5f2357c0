//! Built-in catalog of the Auro jewelry shop.

use chrono::NaiveDate;

use crate::catalog::{Category, Product};
use crate::money::Money;

pub(crate) fn categories() -> Vec<Category> {
    vec![
        Category::new(
            "rings",
            "Rings",
            "https://images.pexels.com/photos/10799227/pexels-photo-10799227.jpeg",
        ),
        Category::new(
            "earrings",
            "Earrings",
            "https://images.pexels.com/photos/20943477/pexels-photo-20943477.jpeg",
        ),
        Category::new(
            "necklaces",
            "Necklaces",
            "https://images.pexels.com/photos/14111392/pexels-photo-14111392.jpeg",
        ),
        Category::new(
            "bracelets",
            "Bracelets",
            "https://images.pexels.com/photos/28985978/pexels-photo-28985978.jpeg",
        ),
        Category::new(
            "bangles",
            "Bangles",
            "https://images.pexels.com/photos/8891958/pexels-photo-8891958.jpeg",
        ),
        Category::new(
            "pendants",
            "Pendants",
            "https://images.pexels.com/photos/29193428/pexels-photo-29193428.jpeg",
        ),
        Category::new(
            "charms",
            "Charms",
            "https://images.pexels.com/photos/6666403/pexels-photo-6666403.jpeg",
        ),
        Category::new(
            "bridal",
            "Bridal",
            "https://images.pexels.com/photos/8306531/pexels-photo-8306531.jpeg",
        ),
        Category::new(
            "mens",
            "Men's",
            "https://images.pexels.com/photos/8839887/pexels-photo-8839887.jpeg",
        ),
    ]
}

pub(crate) fn products() -> Vec<Product> {
    vec![
        Product::new(
            "ring-sol",
            "Solitaire Diamond Ring",
            Money::from_units(1290),
            "https://images.pexels.com/photos/10799227/pexels-photo-10799227.jpeg",
            "rings",
            date(2025, 2, 10),
            95,
        )
        .with_images(images(&[
            "https://images.pexels.com/photos/10799227/pexels-photo-10799227.jpeg",
            "https://images.pexels.com/photos/8891950/pexels-photo-8891950.jpeg",
            "https://images.pexels.com/photos/8839887/pexels-photo-8839887.jpeg",
        ]))
        .with_tag("new"),
        Product::new(
            "ring-eternal",
            "Eternal Band",
            Money::from_units(680),
            "https://images.pexels.com/photos/8891950/pexels-photo-8891950.jpeg",
            "rings",
            date(2025, 1, 22),
            72,
        )
        .with_images(images(&[
            "https://images.pexels.com/photos/8891950/pexels-photo-8891950.jpeg",
            "https://images.pexels.com/photos/10799227/pexels-photo-10799227.jpeg",
            "https://images.pexels.com/photos/8839887/pexels-photo-8839887.jpeg",
        ])),
        Product::new(
            "ear-etoile",
            "\u{c9}toile Hoop Earrings",
            Money::from_units(420),
            "https://images.pexels.com/photos/20943477/pexels-photo-20943477.jpeg",
            "earrings",
            date(2024, 12, 15),
            83,
        )
        .with_images(images(&[
            "https://images.pexels.com/photos/20943477/pexels-photo-20943477.jpeg",
            "https://images.pexels.com/photos/33582778/pexels-photo-33582778.jpeg",
            "https://images.pexels.com/photos/29193428/pexels-photo-29193428.jpeg",
        ])),
        Product::new(
            "ear-drop-pearl",
            "Lustre Pearl Drops",
            Money::from_units(390),
            "https://images.pexels.com/photos/33582778/pexels-photo-33582778.jpeg",
            "earrings",
            date(2024, 11, 10),
            70,
        )
        .with_images(images(&[
            "https://images.pexels.com/photos/33582778/pexels-photo-33582778.jpeg",
            "https://images.pexels.com/photos/20943477/pexels-photo-20943477.jpeg",
            "https://images.pexels.com/photos/29193428/pexels-photo-29193428.jpeg",
        ])),
        Product::new(
            "neck-aurora",
            "Aurora Pendant Necklace",
            Money::from_units(56),
            "https://images.pexels.com/photos/14111392/pexels-photo-14111392.jpeg",
            "necklaces",
            date(2025, 2, 1),
            88,
        )
        .with_images(images(&[
            "https://images.pexels.com/photos/14111392/pexels-photo-14111392.jpeg",
            "https://images.pexels.com/photos/29193428/pexels-photo-29193428.jpeg",
        ])),
        Product::new(
            "neck-chain",
            "Fine Link Chain",
            Money::from_units(310),
            "https://images.pexels.com/photos/14111392/pexels-photo-14111392.jpeg",
            "necklaces",
            date(2024, 10, 2),
            65,
        )
        .with_images(images(&[
            "https://images.pexels.com/photos/14111392/pexels-photo-14111392.jpeg",
            "https://images.pexels.com/photos/29193428/pexels-photo-29193428.jpeg",
        ])),
        Product::new(
            "brace-satin",
            "Satin Gold Bracelet",
            Money::from_units(460),
            "https://images.pexels.com/photos/28985978/pexels-photo-28985978.jpeg",
            "bracelets",
            date(2024, 12, 1),
            77,
        )
        .with_images(images(&[
            "https://images.pexels.com/photos/28985978/pexels-photo-28985978.jpeg",
            "https://images.pexels.com/photos/8891958/pexels-photo-8891958.jpeg",
            "https://images.pexels.com/photos/14111392/pexels-photo-14111392.jpeg",
        ])),
        Product::new(
            "bangle-celeste",
            "Celeste Bangle",
            Money::from_units(520),
            "https://images.pexels.com/photos/8891958/pexels-photo-8891958.jpeg",
            "bangles",
            date(2025, 1, 5),
            81,
        )
        .with_images(images(&[
            "https://images.pexels.com/photos/8891958/pexels-photo-8891958.jpeg",
            "https://images.pexels.com/photos/28985978/pexels-photo-28985978.jpeg",
            "https://images.pexels.com/photos/14111392/pexels-photo-14111392.jpeg",
        ])),
        Product::new(
            "pend-rose",
            "Rose Medallion Pendant",
            Money::from_units(350),
            "https://images.pexels.com/photos/29193428/pexels-photo-29193428.jpeg",
            "pendants",
            date(2024, 9, 28),
            74,
        )
        .with_images(images(&[
            "https://images.pexels.com/photos/29193428/pexels-photo-29193428.jpeg",
            "https://images.pexels.com/photos/14111392/pexels-photo-14111392.jpeg",
        ])),
        Product::new(
            "charm-mina",
            "Mina Charm",
            Money::from_units(120),
            "https://images.pexels.com/photos/6666403/pexels-photo-6666403.jpeg",
            "charms",
            date(2024, 8, 14),
            55,
        )
        .with_images(images(&[
            "https://images.pexels.com/photos/6666403/pexels-photo-6666403.jpeg",
            "https://images.pexels.com/photos/29193428/pexels-photo-29193428.jpeg",
            "https://images.pexels.com/photos/14111392/pexels-photo-14111392.jpeg",
        ])),
        Product::new(
            "bridal-luxe",
            "Luxe Bridal Set",
            Money::from_units(2190),
            "https://images.pexels.com/photos/8306531/pexels-photo-8306531.jpeg",
            "bridal",
            date(2024, 12, 22),
            60,
        )
        .with_images(images(&[
            "https://images.pexels.com/photos/8306531/pexels-photo-8306531.jpeg",
            "https://images.pexels.com/photos/10799227/pexels-photo-10799227.jpeg",
        ])),
        Product::new(
            "mens-steel",
            "Men\u{2019}s Signet Ring",
            Money::from_units(440),
            "https://images.pexels.com/photos/8839887/pexels-photo-8839887.jpeg",
            "mens",
            date(2024, 7, 21),
            50,
        )
        .with_images(images(&[
            "https://images.pexels.com/photos/8839887/pexels-photo-8839887.jpeg",
            "https://images.pexels.com/photos/10799227/pexels-photo-10799227.jpeg",
            "https://images.pexels.com/photos/8891950/pexels-photo-8891950.jpeg",
        ])),
    ]
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn images(urls: &[&str]) -> Vec<String> {
    urls.iter().map(|u| u.to_string()).collect()
}
