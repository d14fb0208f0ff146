//! GraphQL documents sent to the Admin API

pub const CREATE_PRODUCT: &str = r#"mutation populateProduct($input: ProductInput!) {
  productCreate(input: $input) {
    product {
      id
      title
      descriptionHtml
      variants(first: 1) {
        edges {
          node {
            id
            price
          }
        }
      }
    }
    userErrors {
      field
      message
    }
  }
}"#;

pub const UPDATE_VARIANT_PRICE: &str = r#"mutation updateVariantPrice($input: ProductVariantInput!) {
  productVariantUpdate(input: $input) {
    productVariant {
      id
      price
      barcode
      createdAt
    }
    userErrors {
      field
      message
    }
  }
}"#;

pub const ADD_PRODUCTS_TO_COLLECTION: &str = r#"mutation addProductToCollection($id: ID!, $productIds: [ID!]!) {
  collectionAddProducts(id: $id, productIds: $productIds) {
    collection {
      id
      title
    }
    userErrors {
      field
      message
    }
  }
}"#;

pub const CREATE_PRODUCT_MEDIA: &str = r#"mutation addProductImage($productId: ID!, $media: CreateMediaInput!) {
  productCreateMedia(productId: $productId, media: [$media]) {
    media {
      mediaContentType
      status
    }
    mediaUserErrors {
      field
      message
    }
  }
}"#;

pub const FETCH_PRODUCTS: &str = r#"query fetchProducts($first: Int!) {
  products(first: $first) {
    edges {
      node {
        id
        title
        handle
        featuredImage {
          url
          altText
        }
      }
    }
  }
}"#;

pub const FETCH_COLLECTIONS: &str = r#"query fetchCollections($first: Int!) {
  collections(first: $first) {
    edges {
      node {
        id
        title
      }
    }
  }
}"#;
