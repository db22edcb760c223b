//! 产品业务服务

use std::sync::{Arc, Mutex};

use uuid::Uuid;

use super::model::{CreateProductRequest, Product, UpdateProductRequest};
use crate::core::error::CoreError;

/// 产品服务
///
/// 持有进程内的产品集合：一个按插入顺序排列的序列，
/// 由单个 Mutex 保护以支持多线程运行时。
/// 查找均为线性扫描，在预期规模下足够。
#[derive(Clone)]
pub struct ProductService {
    products: Arc<Mutex<Vec<Product>>>,
}

impl ProductService {
    pub fn new() -> Self {
        Self {
            products: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// 获取全部产品（插入顺序）
    pub fn list(&self) -> Vec<Product> {
        self.products.lock().unwrap().clone()
    }

    /// 创建产品，生成新的唯一 id 并追加到序列末尾
    pub fn create(&self, payload: CreateProductRequest) -> Product {
        let product = Product {
            id: Uuid::new_v4(),
            product_name: payload.product_name,
            product_description: payload.product_description,
            product_price: payload.product_price,
        };

        self.products.lock().unwrap().push(product.clone());

        product
    }

    /// 按 id 查找产品
    pub fn get(&self, id: &str) -> Result<Product, CoreError> {
        let id = Uuid::parse_str(id)
            .map_err(|_| CoreError::NotFound("Product not found".to_string()))?;

        let products = self.products.lock().unwrap();

        products
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| CoreError::NotFound("Product not found".to_string()))
    }

    /// 按 id 更新产品
    ///
    /// 提供的字段覆盖原值，未提供的字段保留原值；
    /// `id` 与记录在序列中的位置保持不变。
    pub fn update(&self, id: &str, payload: UpdateProductRequest) -> Result<Product, CoreError> {
        // 更新操作的错误消息带句号
        let id = Uuid::parse_str(id)
            .map_err(|_| CoreError::NotFound("Product not found.".to_string()))?;

        let mut products = self.products.lock().unwrap();

        let product = products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| CoreError::NotFound("Product not found.".to_string()))?;

        if let Some(name) = payload.product_name {
            product.product_name = name;
        }

        if let Some(description) = payload.product_description {
            product.product_description = description;
        }

        if let Some(price) = payload.product_price {
            product.product_price = price;
        }

        Ok(product.clone())
    }

    /// 按 id 删除产品，其余记录保持原有顺序
    pub fn delete(&self, id: &str) -> Result<(), CoreError> {
        let id = Uuid::parse_str(id)
            .map_err(|_| CoreError::NotFound("Product not found".to_string()))?;

        let mut products = self.products.lock().unwrap();

        let index = products
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| CoreError::NotFound("Product not found".to_string()))?;

        products.remove(index);

        Ok(())
    }
}

impl Default for ProductService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_request(name: &str) -> CreateProductRequest {
        CreateProductRequest {
            product_name: name.to_string(),
            product_description: format!("{} description", name),
            product_price: 9.99,
        }
    }

    #[test]
    fn test_create_assigns_unique_ids() {
        let service = ProductService::new();

        let a = service.create(sample_request("A"));
        let b = service.create(sample_request("B"));
        let c = service.create(sample_request("C"));

        assert_ne!(a.id, b.id);
        assert_ne!(b.id, c.id);
        assert_ne!(a.id, c.id);
    }

    #[test]
    fn test_create_then_get_returns_same_fields() {
        let service = ProductService::new();

        let created = service.create(CreateProductRequest {
            product_name: "Pen".to_string(),
            product_description: "Blue ink".to_string(),
            product_price: 1.5,
        });

        let fetched = service.get(&created.id.to_string()).unwrap();

        assert_eq!(fetched.id, created.id);
        assert_eq!(fetched.product_name, "Pen");
        assert_eq!(fetched.product_description, "Blue ink");
        assert_eq!(fetched.product_price, 1.5);
    }

    #[test]
    fn test_list_preserves_insertion_order() {
        let service = ProductService::new();

        let a = service.create(sample_request("A"));
        let b = service.create(sample_request("B"));
        let c = service.create(sample_request("C"));

        let ids: Vec<_> = service.list().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![a.id, b.id, c.id]);
    }

    #[test]
    fn test_update_with_empty_payload_keeps_all_fields() {
        let service = ProductService::new();
        let created = service.create(sample_request("A"));

        let updated = service
            .update(&created.id.to_string(), UpdateProductRequest::default())
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.product_name, created.product_name);
        assert_eq!(updated.product_description, created.product_description);
        assert_eq!(updated.product_price, created.product_price);
    }

    #[test]
    fn test_update_overwrites_only_supplied_fields() {
        let service = ProductService::new();
        let created = service.create(sample_request("A"));

        let updated = service
            .update(
                &created.id.to_string(),
                UpdateProductRequest {
                    product_price: Some(2.0),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(updated.product_price, 2.0);
        assert_eq!(updated.product_name, created.product_name);
        assert_eq!(updated.product_description, created.product_description);
        assert_eq!(updated.id, created.id);
    }

    #[test]
    fn test_update_keeps_position_in_sequence() {
        let service = ProductService::new();

        let a = service.create(sample_request("A"));
        let b = service.create(sample_request("B"));
        let c = service.create(sample_request("C"));

        service
            .update(
                &b.id.to_string(),
                UpdateProductRequest {
                    product_name: Some("B2".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();

        let products = service.list();
        assert_eq!(products[0].id, a.id);
        assert_eq!(products[1].id, b.id);
        assert_eq!(products[1].product_name, "B2");
        assert_eq!(products[2].id, c.id);
    }

    #[test]
    fn test_delete_removes_from_list_and_get() {
        let service = ProductService::new();

        let a = service.create(sample_request("A"));
        let b = service.create(sample_request("B"));
        let c = service.create(sample_request("C"));

        service.delete(&b.id.to_string()).unwrap();

        let ids: Vec<_> = service.list().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![a.id, c.id]);

        assert!(service.get(&b.id.to_string()).is_err());
    }

    #[test]
    fn test_missing_id_does_not_mutate_collection() {
        let service = ProductService::new();
        service.create(sample_request("A"));

        let unknown = Uuid::new_v4().to_string();

        assert!(service.get(&unknown).is_err());
        assert!(service
            .update(&unknown, UpdateProductRequest::default())
            .is_err());
        assert!(service.delete(&unknown).is_err());

        assert_eq!(service.list().len(), 1);
    }

    #[test]
    fn test_non_uuid_id_is_not_found() {
        let service = ProductService::new();
        service.create(sample_request("A"));

        assert!(service.get("not-a-uuid").is_err());
        assert!(service.delete("not-a-uuid").is_err());
        assert_eq!(service.list().len(), 1);
    }
}
