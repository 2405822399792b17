//! Implements the product service, which validates input and checks the
//! category reference before product writes reach the store.

use crate::{
    Error,
    models::{
        DatabaseID, NewProduct, Product, ProductData, ProductDetail, ProductName, ProductSummary,
    },
    stores::ProductStore,
};

/// Validates product operations before they reach the store.
#[derive(Debug, Clone)]
pub struct ProductService<P>
where
    P: ProductStore + Send + Sync,
{
    store: P,
}

impl<P> ProductService<P>
where
    P: ProductStore + Send + Sync,
{
    /// Create a new product service backed by `store`.
    pub fn new(store: P) -> Self {
        Self { store }
    }

    /// Get the summary view of all products, ordered by ascending ID.
    pub fn get_all(&self) -> Result<Vec<ProductSummary>, Error> {
        self.store.get_all()
    }

    /// Get the detail view of the product with `product_id`.
    ///
    /// # Errors
    /// Returns [Error::InvalidId] if `product_id` is not positive, or
    /// [Error::NotFound] if no product matches.
    pub fn get(&self, product_id: DatabaseID) -> Result<ProductDetail, Error> {
        if product_id <= 0 {
            return Err(Error::InvalidId);
        }

        self.store.get(product_id)
    }

    /// Validate `data` and create a product.
    ///
    /// # Errors
    /// Returns the error for the first failing validation check (see
    /// [ProductService::validate]).
    pub fn create(&self, data: ProductData) -> Result<Product, Error> {
        let product = self.validate(data)?;

        self.store.create(product)
    }

    /// Validate `data` and replace every field of the product with
    /// `product_id`.
    ///
    /// # Errors
    /// Returns [Error::InvalidId] if `product_id` is not positive, the error
    /// for the first failing validation check, or
    /// [Error::UpdateMissingProduct] if no product matches.
    pub fn update(&self, product_id: DatabaseID, data: ProductData) -> Result<Product, Error> {
        if product_id <= 0 {
            return Err(Error::InvalidId);
        }

        let product = self.validate(data)?;

        self.store.update(product_id, product.clone())?;

        // The store reported the row as updated, so the replacement can be
        // echoed back without a second query.
        Ok(Product {
            id: product_id,
            name: product.name,
            price: product.price,
            stock: product.stock,
            category_id: product.category_id,
        })
    }

    /// Delete the product with `product_id`.
    ///
    /// # Errors
    /// Returns [Error::InvalidId] if `product_id` is not positive, or
    /// [Error::DeleteMissingProduct] if no product matches.
    pub fn delete(&self, product_id: DatabaseID) -> Result<(), Error> {
        if product_id <= 0 {
            return Err(Error::InvalidId);
        }

        self.store.delete(product_id)
    }

    /// Check the fields of `data` and convert it into a [NewProduct].
    ///
    /// Checks run in a fixed order and the first failure wins: name, then
    /// price, then stock, then the category ID, then category existence. The
    /// category reference is checked against the store on every call since a
    /// category that existed for an earlier write may have been deleted
    /// since.
    fn validate(&self, data: ProductData) -> Result<NewProduct, Error> {
        let name = ProductName::new(&data.name)?;

        if data.price <= 0 {
            return Err(Error::InvalidPrice);
        }

        if data.stock < 0 {
            return Err(Error::InvalidStock);
        }

        if data.category_id <= 0 {
            return Err(Error::InvalidCategoryId);
        }

        if !self.store.category_exists(data.category_id)? {
            return Err(Error::CategoryNotFound);
        }

        Ok(NewProduct {
            name,
            price: data.price,
            stock: data.stock,
            category_id: data.category_id,
        })
    }
}

#[cfg(test)]
mod product_service_tests {
    use std::sync::{Arc, Mutex};

    use crate::{
        Error,
        models::{
            DatabaseID, NewProduct, Product, ProductData, ProductDetail, ProductName,
            ProductSummary,
        },
        stores::ProductStore,
    };

    use super::ProductService;

    #[derive(Debug, Clone, PartialEq)]
    struct UpdateProductCall {
        product_id: DatabaseID,
        product: NewProduct,
    }

    #[derive(Clone)]
    struct SpyProductStore {
        // Arc Mutex so that clones of the store share state with the copy
        // held by the service under test.
        create_calls: Arc<Mutex<Vec<NewProduct>>>,
        update_calls: Arc<Mutex<Vec<UpdateProductCall>>>,
        delete_calls: Arc<Mutex<Vec<DatabaseID>>>,
        get_calls: Arc<Mutex<Vec<DatabaseID>>>,
        category_exists_calls: Arc<Mutex<Vec<DatabaseID>>>,
        existing_category_ids: Arc<Mutex<Vec<DatabaseID>>>,
    }

    impl SpyProductStore {
        fn new() -> Self {
            Self {
                create_calls: Arc::new(Mutex::new(vec![])),
                update_calls: Arc::new(Mutex::new(vec![])),
                delete_calls: Arc::new(Mutex::new(vec![])),
                get_calls: Arc::new(Mutex::new(vec![])),
                category_exists_calls: Arc::new(Mutex::new(vec![])),
                existing_category_ids: Arc::new(Mutex::new(vec![])),
            }
        }

        fn with_category(self, category_id: DatabaseID) -> Self {
            self.existing_category_ids
                .lock()
                .unwrap()
                .push(category_id);
            self
        }
    }

    impl ProductStore for SpyProductStore {
        fn create(&self, product: NewProduct) -> Result<Product, Error> {
            self.create_calls.lock().unwrap().push(product.clone());

            Ok(Product {
                id: 1,
                name: product.name,
                price: product.price,
                stock: product.stock,
                category_id: product.category_id,
            })
        }

        fn get(&self, product_id: DatabaseID) -> Result<ProductDetail, Error> {
            self.get_calls.lock().unwrap().push(product_id);

            Ok(ProductDetail {
                id: product_id,
                name: ProductName::new_unchecked("Cola"),
                price: 350,
                stock: 24,
                category_id: 1,
                category_name: Some("Beverages".to_string()),
            })
        }

        fn get_all(&self) -> Result<Vec<ProductSummary>, Error> {
            Ok(vec![])
        }

        fn update(&self, product_id: DatabaseID, product: NewProduct) -> Result<(), Error> {
            self.update_calls.lock().unwrap().push(UpdateProductCall {
                product_id,
                product,
            });

            Ok(())
        }

        fn delete(&self, product_id: DatabaseID) -> Result<(), Error> {
            self.delete_calls.lock().unwrap().push(product_id);

            Ok(())
        }

        fn category_exists(&self, category_id: DatabaseID) -> Result<bool, Error> {
            self.category_exists_calls
                .lock()
                .unwrap()
                .push(category_id);

            Ok(self
                .existing_category_ids
                .lock()
                .unwrap()
                .contains(&category_id))
        }
    }

    fn get_test_service() -> (ProductService<SpyProductStore>, SpyProductStore) {
        let store = SpyProductStore::new().with_category(1);

        (ProductService::new(store.clone()), store)
    }

    fn valid_data() -> ProductData {
        ProductData {
            name: "Cola".to_string(),
            price: 350,
            stock: 24,
            category_id: 1,
        }
    }

    #[test]
    fn create_product_passes_validated_product_to_store() {
        let (service, store) = get_test_service();

        let product = service.create(valid_data()).unwrap();

        assert_eq!(product.id, 1);
        assert_eq!(
            *store.create_calls.lock().unwrap(),
            vec![NewProduct {
                name: ProductName::new_unchecked("Cola"),
                price: 350,
                stock: 24,
                category_id: 1,
            }]
        );
    }

    #[test]
    fn create_product_allows_zero_stock() {
        let (service, _) = get_test_service();

        let product = service
            .create(ProductData {
                stock: 0,
                ..valid_data()
            })
            .unwrap();

        assert_eq!(product.stock, 0);
    }

    #[test]
    fn create_product_with_empty_name_does_not_touch_store() {
        let (service, store) = get_test_service();

        let result = service.create(ProductData {
            name: String::new(),
            ..valid_data()
        });

        assert_eq!(result, Err(Error::EmptyProductName));
        assert!(store.create_calls.lock().unwrap().is_empty());
        assert!(store.category_exists_calls.lock().unwrap().is_empty());
    }

    #[test]
    fn create_product_with_non_positive_price_is_rejected() {
        let (service, store) = get_test_service();

        for price in [0, -100] {
            let result = service.create(ProductData {
                price,
                ..valid_data()
            });

            assert_eq!(result, Err(Error::InvalidPrice));
        }

        assert!(store.create_calls.lock().unwrap().is_empty());
    }

    #[test]
    fn create_product_with_negative_stock_is_rejected() {
        let (service, store) = get_test_service();

        let result = service.create(ProductData {
            stock: -1,
            ..valid_data()
        });

        assert_eq!(result, Err(Error::InvalidStock));
        assert!(store.create_calls.lock().unwrap().is_empty());
    }

    #[test]
    fn create_product_with_non_positive_category_id_skips_existence_check() {
        let (service, store) = get_test_service();

        let result = service.create(ProductData {
            category_id: 0,
            ..valid_data()
        });

        assert_eq!(result, Err(Error::InvalidCategoryId));
        assert!(store.category_exists_calls.lock().unwrap().is_empty());
        assert!(store.create_calls.lock().unwrap().is_empty());
    }

    #[test]
    fn create_product_with_unknown_category_does_not_touch_store() {
        let (service, store) = get_test_service();

        let result = service.create(ProductData {
            category_id: 999,
            ..valid_data()
        });

        assert_eq!(result, Err(Error::CategoryNotFound));
        assert_eq!(*store.category_exists_calls.lock().unwrap(), vec![999]);
        assert!(store.create_calls.lock().unwrap().is_empty());
    }

    #[test]
    fn create_product_with_multiple_invalid_fields_reports_name_first() {
        let (service, _) = get_test_service();

        let result = service.create(ProductData {
            name: String::new(),
            price: -1,
            stock: -1,
            category_id: 0,
        });

        assert_eq!(result, Err(Error::EmptyProductName));
    }

    #[test]
    fn create_product_with_invalid_price_and_stock_reports_price_first() {
        let (service, _) = get_test_service();

        let result = service.create(ProductData {
            price: 0,
            stock: -1,
            ..valid_data()
        });

        assert_eq!(result, Err(Error::InvalidPrice));
    }

    #[test]
    fn get_product_with_non_positive_id_does_not_touch_store() {
        let (service, store) = get_test_service();

        assert_eq!(service.get(0), Err(Error::InvalidId));
        assert_eq!(service.get(-42), Err(Error::InvalidId));
        assert!(store.get_calls.lock().unwrap().is_empty());
    }

    #[test]
    fn get_product_passes_id_to_store() {
        let (service, store) = get_test_service();

        service.get(42).unwrap();

        assert_eq!(*store.get_calls.lock().unwrap(), vec![42]);
    }

    #[test]
    fn update_product_returns_replacement() {
        let (service, store) = get_test_service();

        let product = service.update(5, valid_data()).unwrap();

        assert_eq!(
            product,
            Product {
                id: 5,
                name: ProductName::new_unchecked("Cola"),
                price: 350,
                stock: 24,
                category_id: 1,
            }
        );
        assert_eq!(
            *store.update_calls.lock().unwrap(),
            vec![UpdateProductCall {
                product_id: 5,
                product: NewProduct {
                    name: ProductName::new_unchecked("Cola"),
                    price: 350,
                    stock: 24,
                    category_id: 1,
                },
            }]
        );
    }

    #[test]
    fn update_product_with_non_positive_id_skips_validation() {
        let (service, store) = get_test_service();

        let result = service.update(
            0,
            ProductData {
                name: String::new(),
                ..valid_data()
            },
        );

        assert_eq!(result, Err(Error::InvalidId));
        assert!(store.update_calls.lock().unwrap().is_empty());
        assert!(store.category_exists_calls.lock().unwrap().is_empty());
    }

    #[test]
    fn update_product_with_unknown_category_does_not_touch_store() {
        let (service, store) = get_test_service();

        let result = service.update(
            5,
            ProductData {
                category_id: 999,
                ..valid_data()
            },
        );

        assert_eq!(result, Err(Error::CategoryNotFound));
        assert!(store.update_calls.lock().unwrap().is_empty());
    }

    #[test]
    fn delete_product_with_non_positive_id_does_not_touch_store() {
        let (service, store) = get_test_service();

        let result = service.delete(0);

        assert_eq!(result, Err(Error::InvalidId));
        assert!(store.delete_calls.lock().unwrap().is_empty());
    }

    #[test]
    fn delete_product_passes_id_to_store() {
        let (service, store) = get_test_service();

        service.delete(5).unwrap();

        assert_eq!(*store.delete_calls.lock().unwrap(), vec![5]);
    }
}
