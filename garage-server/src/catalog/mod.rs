//! Partner shop catalog
//!
//! Fixed reference data: the repair shops a customer can pick before
//! opening the booking calendar. Read-only; a real deployment would load
//! this from the partner registry.

use shared::models::Shop;

/// The partner shop catalog
pub struct ShopCatalog {
    shops: Vec<Shop>,
}

impl ShopCatalog {
    /// The shipped partner catalog
    pub fn partner_catalog() -> Self {
        let shops = [
            (
                "shop1",
                "서울자동차정비",
                "서울",
                "서울시 강남구 테헤란로 123",
                "02-1234-5678",
                4.8,
                "20년 경력의 전문 정비소",
            ),
            (
                "shop2",
                "강남카센터",
                "서울",
                "서울시 강남구 역삼동 456",
                "02-2345-6789",
                4.5,
                "수입차 전문 정비",
            ),
            (
                "shop3",
                "부산모터스",
                "부산",
                "부산시 해운대구 센텀로 789",
                "051-3456-7890",
                4.7,
                "해운대 최고의 정비소",
            ),
            (
                "shop4",
                "인천오토",
                "인천",
                "인천시 연수구 송도대로 321",
                "032-4567-8901",
                4.6,
                "친절한 서비스, 합리적인 가격",
            ),
            (
                "shop5",
                "대구자동차",
                "대구",
                "대구시 수성구 범어동 654",
                "053-5678-9012",
                4.4,
                "국산차 전문",
            ),
            (
                "shop6",
                "서울프리미엄정비",
                "서울",
                "서울시 송파구 잠실동 987",
                "02-6789-0123",
                4.9,
                "프리미엄 수입차 전문",
            ),
            (
                "shop7",
                "부산카테크",
                "부산",
                "부산시 남구 대연동 147",
                "051-7890-1234",
                4.3,
                "첨단 장비 보유",
            ),
            (
                "shop8",
                "경기오토서비스",
                "경기",
                "경기도 성남시 분당구 정자동 258",
                "031-8901-2345",
                4.5,
                "분당 지역 대표 정비소",
            ),
        ]
        .into_iter()
        .map(
            |(id, name, region, address, phone, rating, description)| Shop {
                id: id.to_string(),
                name: name.to_string(),
                region: region.to_string(),
                address: address.to_string(),
                phone: phone.to_string(),
                rating,
                description: description.to_string(),
            },
        )
        .collect();

        Self { shops }
    }

    /// All shops in catalog order
    pub fn all(&self) -> &[Shop] {
        &self.shops
    }

    /// Find one shop by id
    pub fn find(&self, id: &str) -> Option<&Shop> {
        self.shops.iter().find(|s| s.id == id)
    }

    /// Distinct regions, catalog order
    pub fn regions(&self) -> Vec<String> {
        let mut regions: Vec<String> = Vec::new();
        for shop in &self.shops {
            if !regions.contains(&shop.region) {
                regions.push(shop.region.clone());
            }
        }
        regions
    }

    /// Filter by region and/or free-text query over name, address and
    /// description
    pub fn search(&self, region: Option<&str>, query: Option<&str>) -> Vec<&Shop> {
        self.shops
            .iter()
            .filter(|shop| match region {
                Some(r) if !r.is_empty() => shop.region == r,
                _ => true,
            })
            .filter(|shop| match query {
                Some(q) if !q.is_empty() => {
                    shop.name.contains(q)
                        || shop.address.contains(q)
                        || shop.description.contains(q)
                }
                _ => true,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_contents() {
        let catalog = ShopCatalog::partner_catalog();
        assert_eq!(catalog.all().len(), 8);
        assert!(catalog.all().iter().all(|s| (0.0..=5.0).contains(&s.rating)));
    }

    #[test]
    fn test_find_by_id() {
        let catalog = ShopCatalog::partner_catalog();
        assert_eq!(catalog.find("shop3").unwrap().name, "부산모터스");
        assert!(catalog.find("shop99").is_none());
    }

    #[test]
    fn test_region_filter() {
        let catalog = ShopCatalog::partner_catalog();
        let seoul = catalog.search(Some("서울"), None);
        assert_eq!(seoul.len(), 3);
        assert!(seoul.iter().all(|s| s.region == "서울"));

        // Empty region means no filter
        assert_eq!(catalog.search(Some(""), None).len(), 8);
    }

    #[test]
    fn test_text_search() {
        let catalog = ShopCatalog::partner_catalog();
        let hits = catalog.search(None, Some("수입차"));
        assert_eq!(hits.len(), 2);

        let both = catalog.search(Some("서울"), Some("프리미엄"));
        assert_eq!(both.len(), 1);
        assert_eq!(both[0].id, "shop6");
    }

    #[test]
    fn test_regions() {
        let catalog = ShopCatalog::partner_catalog();
        assert_eq!(catalog.regions(), vec!["서울", "부산", "인천", "대구", "경기"]);
    }
}
