//! Built-in product dataset.

use super::Product;
use crate::rating::Grade;

fn image(slug: &str) -> String {
    format!("https://images.nebulatide.app/products/{}.png", slug)
}

/// The fixed catalog shipped with the application.
pub(super) fn products() -> Vec<Product> {
    vec![
        Product::new(1, "8718452000011", "Melkchocolade Reep", "Tony's Chocolonely", "chocolade")
            .with_rating(Grade::A)
            .with_image(image("tonys-melk"))
            .with_reason("✅ Slaafvrije cacao")
            .with_reason("✅ Fairtrade gecertificeerd")
            .with_reason("⚠️ Veel suiker"),
        Product::new(2, "8711000500019", "Kitkat 4-Finger", "Nestlé", "chocolade")
            .with_rating(Grade::D)
            .with_image(image("kitkat"))
            .with_reason("❌ Palmolie")
            .with_reason("❌ Plastic verpakking")
            .with_reason("⚠️ Rainforest Alliance, geen Fairtrade"),
        Product::new(3, "8712800000034", "Pure Chocolade 72%", "Verkade", "chocolade")
            .with_rating(Grade::BPlus)
            .with_image(image("verkade-puur"))
            .with_reason("✅ Papieren verpakking")
            .with_reason("⚠️ Cacao deels gecertificeerd"),
        Product::new(4, "4000417025005", "Ritter Sport Alpenmelk", "Ritter Sport", "chocolade")
            .with_rating(Grade::CPlus)
            .with_image(image("ritter-alpenmelk"))
            .with_reason("✅ Eigen cacaoplantage")
            .with_reason("❌ Plastic verpakking"),
        Product::new(5, "8711000421451", "Gemalen Koffie Aroma Rood", "Douwe Egberts", "koffie")
            .with_rating(Grade::C)
            .with_image(image("de-aroma-rood"))
            .with_reason("⚠️ Gedeeltelijk duurzame bonen")
            .with_reason("❌ Niet recyclebare verpakking"),
        Product::new(6, "8714100635025", "Biologische Koffiebonen", "Peeze", "koffie")
            .with_rating(Grade::AMinus)
            .with_image(image("peeze-bio"))
            .with_reason("✅ Biologisch")
            .with_reason("✅ Directe handel met boeren"),
        Product::new(7, "8713965000071", "Fairtrade Snelfilter", "Max Havelaar", "koffie")
            .with_rating(Grade::B)
            .with_image(image("max-havelaar-filter"))
            .with_reason("✅ Fairtrade gecertificeerd")
            .with_reason("⚠️ Lange transportketen"),
        Product::new(8, "8712800147008", "Halfvolle Melk", "Campina", "zuivel")
            .with_rating(Grade::BMinus)
            .with_image(image("campina-halfvol"))
            .with_reason("✅ Weidemelk")
            .with_reason("❌ Hoge CO2-uitstoot"),
        Product::new(9, "8718265082315", "Haverdrink Naturel", "Oatly", "zuivel")
            .with_rating(Grade::A)
            .with_image(image("oatly-naturel"))
            .with_reason("✅ Plantaardig")
            .with_reason("✅ Lage CO2-uitstoot")
            .with_reason("⚠️ Toegevoegde olie"),
        Product::new(10, "8720182000103", "Biologische Yoghurt", "Zuivelhoeve", "zuivel")
            .with_rating(Grade::BPlus)
            .with_image(image("zuivelhoeve-bio"))
            .with_reason("✅ Biologisch")
            .with_reason("⚠️ Plastic beker"),
        Product::new(11, "5449000000996", "Coca-Cola Regular", "Coca-Cola", "frisdrank")
            .with_rating(Grade::E)
            .with_image(image("coca-cola"))
            .with_reason("❌ Veel suiker")
            .with_reason("❌ Plastic fles")
            .with_reason("❌ Hoog waterverbruik"),
        Product::new(12, "8712100000121", "Bruisend Mineraalwater", "Spa", "frisdrank")
            .with_rating(Grade::B)
            .with_image(image("spa-rood"))
            .with_reason("✅ Geen suiker")
            .with_reason("⚠️ Plastic fles"),
        Product::new(13, "8719327000136", "Sinas Light", "Fanta", "frisdrank")
            .with_rating(Grade::DMinus)
            .with_image(image("fanta-light"))
            .with_reason("❌ Kunstmatige zoetstoffen")
            .with_reason("❌ Plastic fles"),
        Product::new(14, "8710400000145", "Pindakaas", "Calvé", "broodbeleg")
            .with_rating(Grade::C)
            .with_image(image("calve-pindakaas"))
            .with_reason("⚠️ Toegevoegd zout")
            .with_reason("✅ Glazen pot"),
        Product::new(15, "8717677000154", "Pindakaas 100% Pinda", "Jack's", "broodbeleg")
            .with_rating(Grade::AMinus)
            .with_image(image("jacks-pinda"))
            .with_reason("✅ Eén ingrediënt")
            .with_reason("✅ Glazen pot"),
        Product::new(16, "8710400000169", "Hagelslag Puur", "De Ruijter", "broodbeleg")
            .with_rating(Grade::EMinus)
            .with_image(image("de-ruijter-puur"))
            .with_reason("❌ Veel suiker")
            .with_reason("❌ Palmolie"),
    ]
}
