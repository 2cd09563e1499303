//! Initial catalog and testimonials for an empty store.

use models::{Product, ProductCreate, Testimonial, TestimonialCreate};
use tracing::info;

use crate::errors::ServiceError;
use crate::storage::Collection;

/// How many documents one seeding run inserted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub products: usize,
    pub testimonials: usize,
}

type ProductRow = (&'static str, &'static str, f64, &'static str, &'static str, i64, bool);

const PRODUCTS: [ProductRow; 8] = [
    (
        "Ração Premium Golden - Cães Adultos",
        "Ração super premium para cães adultos de porte médio e grande. Rico em proteínas e nutrientes essenciais.",
        189.90, "racao", "https://images.unsplash.com/photo-1589924691995-400dc9ecc119?w=400", 50, true,
    ),
    (
        "Ração Whiskas - Gatos Adultos",
        "Alimento completo para gatos adultos com sabor frango. Nutrição balanceada.",
        89.90, "racao", "https://images.unsplash.com/photo-1615141982883-c7ad0e69fd62?w=400", 35, true,
    ),
    (
        "Brinquedo Ossinho de Borracha",
        "Brinquedo resistente para cães. Ideal para brincadeiras e limpeza dental.",
        29.90, "brinquedos", "https://images.unsplash.com/photo-1535294435445-d7249524ef2e?w=400", 100, false,
    ),
    (
        "Shampoo Antipulgas 500ml",
        "Shampoo especializado para eliminar pulgas e carrapatos. Fórmula suave.",
        45.90, "higiene", "https://images.unsplash.com/photo-1584305574647-0cc949a2bb9f?w=400", 60, false,
    ),
    (
        "Coleira Antipulgas - 8 meses",
        "Proteção prolongada contra pulgas e carrapatos por até 8 meses.",
        79.90, "acessorios", "https://images.unsplash.com/photo-1583337130417-3346a1be7dee?w=400", 40, true,
    ),
    (
        "Cama Pet Luxo - Tamanho M",
        "Cama confortável com espuma de alta densidade. Capa removível e lavável.",
        159.90, "camas", "https://images.unsplash.com/photo-1541781774459-bb2af2f05b55?w=400", 20, true,
    ),
    (
        "Vermífugo Comprimido",
        "Vermífugo de amplo espectro para cães e gatos. Fácil administração.",
        35.90, "medicamentos", "https://images.unsplash.com/photo-1587854692152-cbe660dbde88?w=400", 80, false,
    ),
    (
        "Arranhador para Gatos",
        "Arranhador vertical com plataforma. Ideal para exercícios e diversão.",
        129.90, "brinquedos", "https://images.unsplash.com/photo-1545249390-6bdfa286032f?w=400", 15, false,
    ),
];

const TESTIMONIALS: [(&str, i64, &str, &str); 5] = [
    ("Maria Silva", 5, "Atendimento excepcional! O Dr. Artur foi muito atencioso com meu cachorro. Recomendo demais!", "Thor"),
    ("João Santos", 5, "Melhor pet shop da região. Produtos de qualidade e preços justos. A equipe sempre me orienta muito bem.", "Luna"),
    ("Ana Oliveira", 4, "Minha gatinha foi muito bem cuidada durante a consulta. Ambiente limpo e organizado.", "Mimi"),
    ("Carlos Pereira", 5, "Confio há anos no Dr. Artur. Profissional competente e que realmente ama os animais.", "Bob"),
    ("Fernanda Lima", 5, "O serviço de banho e tosa é excelente! Meu pet sempre volta lindo e cheiroso.", "Rex"),
];

pub fn sample_products() -> Vec<Product> {
    PRODUCTS
        .iter()
        .map(|&(name, description, price, category, image_url, stock, featured)| {
            Product::new(ProductCreate {
                name: name.into(),
                description: description.into(),
                price,
                category: category.into(),
                image_url: image_url.into(),
                stock,
                featured,
            })
        })
        .collect()
}

pub fn sample_testimonials() -> Vec<Testimonial> {
    TESTIMONIALS
        .iter()
        .map(|&(author_name, rating, text, pet_name)| {
            Testimonial::new(TestimonialCreate {
                author_name: author_name.into(),
                rating,
                text: text.into(),
                pet_name: Some(pet_name.into()),
            })
        })
        .collect()
}

/// Fill each empty collection with its samples. Non-empty collections are left alone,
/// so running this again is a no-op.
pub async fn seed_initial_data(
    products: &Collection<Product>,
    testimonials: &Collection<Testimonial>,
) -> Result<SeedReport, ServiceError> {
    let mut report = SeedReport::default();

    if products.count().await? == 0 {
        let rows = sample_products();
        products.insert_many(&rows).await?;
        report.products = rows.len();
    }

    if testimonials.count().await? == 0 {
        let rows = sample_testimonials();
        testimonials.insert_many(&rows).await?;
        report.testimonials = rows.len();
    }

    info!(products = report.products, testimonials = report.testimonials, "seed finished");
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::temp_store;

    #[tokio::test]
    async fn seeding_twice_does_not_duplicate() -> anyhow::Result<()> {
        let (store, dir) = temp_store().await?;
        let products = Collection::<Product>::new(store.clone());
        let testimonials = Collection::<Testimonial>::new(store);

        let first = seed_initial_data(&products, &testimonials).await?;
        assert_eq!(first, SeedReport { products: 8, testimonials: 5 });
        let second = seed_initial_data(&products, &testimonials).await?;
        assert_eq!(second, SeedReport::default());

        assert_eq!(products.count().await?, 8);
        assert_eq!(testimonials.count().await?, 5);
        let _ = tokio::fs::remove_dir_all(dir).await;
        Ok(())
    }

    #[tokio::test]
    async fn only_empty_collections_are_seeded() -> anyhow::Result<()> {
        let (store, dir) = temp_store().await?;
        let products = Collection::<Product>::new(store.clone());
        let testimonials = Collection::<Testimonial>::new(store);
        products.insert(&sample_products()[0]).await?;

        let report = seed_initial_data(&products, &testimonials).await?;
        assert_eq!(report, SeedReport { products: 0, testimonials: 5 });
        assert_eq!(products.count().await?, 1);
        let _ = tokio::fs::remove_dir_all(dir).await;
        Ok(())
    }

    #[test]
    fn samples_cover_featured_products() {
        let featured = sample_products().iter().filter(|p| p.featured).count();
        assert_eq!(featured, 4);
        assert!(sample_testimonials().iter().all(|t| t.pet_name.is_some()));
    }
}
