//! The grocery store that ships with the binary.

use crate::core::catalog::Catalog;
use crate::core::suggestions::SuggestionTable;
use crate::domain::model::{CatalogItem, Category, ProductId};
use std::collections::HashMap;

#[allow(clippy::too_many_arguments)]
fn product(
    id: ProductId,
    name: &str,
    brand: &str,
    quantity: &str,
    price: u64,
    category: Category,
    image: &str,
    keywords: &[&str],
) -> CatalogItem {
    CatalogItem {
        id,
        name: name.to_string(),
        brand: brand.to_string(),
        quantity: quantity.to_string(),
        price,
        category,
        image: image.to_string(),
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
    }
}

#[rustfmt::skip]
pub fn products() -> Vec<CatalogItem> {
    use Category::*;

    vec![
        product(1, "Amul Taaza Toned Milk", "Amul", "500ml", 27, Dairy, "https://www.bbassets.com/media/uploads/p/l/40090894_7-amul-taaza.jpg", &["milk", "doodh", "दूध"]),
        product(2, "Amul Butter Pasteurised", "Amul", "100g", 56, Dairy, "https://www.bbassets.com/media/uploads/p/xl/104860_8-amul-butter-pasteurised.jpg", &["butter", "makkhan", "मक्खन"]),
        product(3, "Mother Dairy Classic Curd", "Mother Dairy", "400g", 35, Dairy, "https://www.bbassets.com/media/uploads/p/l/40004532_8-mother-dairy-dahi-made-from-toned-milk.jpg", &["curd", "dahi", "दही"]),
        product(4, "Amul Cheese Slices", "Amul", "200g", 135, Dairy, "https://m.media-amazon.com/images/I/71vM-znOuDL.jpg", &["cheese", "paneer", "पनीर"]),
        product(5, "Amul Masti Yoghurt", "Amul", "100g", 30, Dairy, "https://m.media-amazon.com/images/I/81GH9Js1xiL.jpg", &["yoghurt", "yogurt", "योगर्ट"]),
        product(6, "Fresh Apple", "Local", "1kg", 120, Fruits, "https://encrypted-tbn2.gstatic.com/shopping?q=tbn:ANd9GcQOmASJvO4ijzdYuPlBR0oYEAYMJbzsUpJL5x5c8Iw8rigTRy7Jp2g-v7-2lmitgBcZONEVs8vsisOMzq7nbE8ySXVu4qb9t9yjkADAvi8", &["apple", "seb", "सेब"]),
        product(7, "Pineapple Queen", "Local", "1pc", 80, Fruits, "https://www.jiomart.com/images/product/original/590000070/pineapple-queen-1-pc-approx-700-g-1200-g-product-images-o590000070-p590000070-0-202409041925.jpg", &["pineapple", "अनानास"]),
        product(8, "Ratnagiri Alphonso Mango", "Local", "1kg", 350, Fruits, "https://aamrai.com/wp-content/uploads/2024/01/Group-71.webp", &["mango", "aam", "आम"]),
        product(9, "Fresho Dragon Fruit", "Fresho", "1pc", 100, Fruits, "https://www.bbassets.com/media/uploads/p/l/40008982_17-fresho-dragon-fruit.jpg", &["dragon fruit", "ड्रैगन फ्रूट"]),
        product(10, "Dozen Bananas", "Local", "12 pieces", 60, Fruits, "https://www.bigbasket.com/media/uploads/p/m/10000025_27-fresho-banana-robusta.jpg", &["banana", "kele", "kela", "केला", "केले"]),
        product(11, "English Oven Brown Bread", "English Oven", "400g", 50, Bakery, "https://m.media-amazon.com/images/I/71zLJqDIGTL.jpg", &["bread", "roti", "ब्रेड"]),
        product(12, "Chocolate Doughnut", "Local Bakery", "1pc", 70, Bakery, "https://www.greatestbakery.in/wp-content/uploads/2022/03/Buy-Doughnut-in-Nagercoil.jpg", &["doughnut", "donut", "डोनट"]),
        product(13, "Pancake & Waffle Mix", "Betty Crocker", "500g", 250, Bakery, "https://encrypted-tbn1.gstatic.com/shopping?q=tbn:ANd9GcRgYeWMfwRq8p_DrD_Tu4RChq3WfzZlO7ZBEkUuKAo6WZRiZ7tjwILPc2P5Kg4kvOq2iLUZBSDyHginQ6V2Tm4HO8dDk23Efw3AMJcg2fdBfNS2qZQFuxNF", &["pancake", "waffle", "पैनकेक"]),
        product(14, "Biscoff Cheesecake Slice", "Local Bakery", "1 slice", 220, Bakery, "https://prd-upmarket.s3.ap-south-1.amazonaws.com/AA0013/generated/ar1x1/large/BiscoffCheesecake-slice-Large.jpg", &["cheesecake", "cake", "चीज़केक"]),
        product(15, "Parle-G Gold Biscuits", "Parle-G", "1kg", 120, Bakery, "https://rukminim2.flixcart.com/image/850/1000/kuczmvk0/cookie-biscuit/3/4/a/g-gold-biscuits-parle-original-imag7hvdfyndrvtx.jpeg?q=90", &["biscuit", "parle", "बिस्कुट"]),
        product(16, "Lays Potato Chips", "Lays", "52g", 20, Snacks, "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcQRPPI5Oa7NmY2bIiK_6i1PmrOrrvKCRM6pIQ&s", &["chips", "lays", "चिप्स"]),
        product(17, "Pringles Original", "Pringles", "100g", 99, Snacks, "https://m.media-amazon.com/images/I/71nDKAex-YL._UF350,350_QL80_.jpg", &["pringles", "प्रिंगल्स"]),
        product(18, "Haldiram Bhujia", "Haldiram", "200g", 55, Snacks, "https://www.pankaj-boutique.com/31504-large_default/namkeens-indian-bhujia.jpg", &["bhujia", "namkeen", "भुजिया"]),
        product(19, "Kurkure Masala Munch", "Kurkure", "90g", 20, Snacks, "https://rukminim2.flixcart.com/image/704/844/l5iid8w0/snack-savourie/t/c/i/-original-imagg65fez3mdsf5.jpeg?q=90&crop=false", &["kurkure", "कुरकुरे"]),
        product(20, "Tata Salt", "Tata", "1kg", 25, Pantry, "https://m.media-amazon.com/images/I/614mm2hYHyL.jpg", &["salt", "namak", "नमक"]),
        product(21, "Aashirvaad Shudh Chakki Atta", "Aashirvaad", "5kg", 250, Pantry, "https://m.media-amazon.com/images/I/9104JpXbv6L._UF1000,1000_QL80_.jpg", &["atta", "flour", "आटा"]),
        product(22, "Fortune Sun Lite Refined Sunflower Oil", "Fortune", "1L", 150, Pantry, "https://m.media-amazon.com/images/I/81FbVYZJYyL.jpg", &["oil", "tel", "तेल"]),
        product(23, "Tata Tea Gold", "Tata Tea", "250g", 150, Pantry, "https://m.media-amazon.com/images/I/61m1sZRyMqL._UF894,1000_QL80_.jpg", &["tea", "chai", "चाय"]),
        product(24, "Colgate MaxFresh Toothpaste", "Colgate", "50g", 40, Pantry, "https://m.media-amazon.com/images/I/61f+32QXZML._UF1000,1000_QL80_.jpg", &["toothpaste", "colgate", "टूथपेस्ट"]),
    ]
}

pub fn suggestion_edges() -> HashMap<ProductId, Vec<ProductId>> {
    HashMap::from([
        (1, vec![15, 13]), // milk -> biscuits, pancake mix
        (2, vec![11, 4]),
        (3, vec![10, 8]),
        (4, vec![11, 16]),
        (6, vec![10, 3]),
        (11, vec![2, 4]),
        (16, vec![17, 19]),
        (21, vec![22, 20]),
        (23, vec![15]),
    ])
}

pub fn catalog() -> Catalog {
    Catalog::new(products())
}

pub fn suggestion_table() -> SuggestionTable {
    SuggestionTable::new(suggestion_edges())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_store_is_consistent() {
        let catalog = catalog();
        assert_eq!(catalog.len(), 24);
        for targets in suggestion_edges().values() {
            for id in targets {
                assert!(catalog.get(*id).is_some(), "dangling suggestion {}", id);
            }
        }
    }
}
