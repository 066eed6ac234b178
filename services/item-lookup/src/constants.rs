// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

// Env values used by the item lookup client.
pub const PAAPI_ACCESS_KEY_ID: &str = "PAAPI_ACCESS_KEY_ID";
pub const PAAPI_SECRET_ACCESS_KEY: &str = "PAAPI_SECRET_ACCESS_KEY";
pub const PAAPI_ASSOCIATE_TAG: &str = "PAAPI_ASSOCIATE_TAG";
pub const PAAPI_ENDPOINT: &str = "PAAPI_ENDPOINT";

// Fixed values of the Product Advertising API.
pub const DEFAULT_ENDPOINT: &str = "webservices.amazon.com";
pub const DEFAULT_SCHEME: &str = "https";
pub const REQUEST_PATH: &str = "/onca/xml";
pub const SERVICE_NAME: &str = "AWSECommerceService";
pub const OPERATION_ITEM_LOOKUP: &str = "ItemLookup";

// Query parameters.
pub const PARAM_SERVICE: &str = "Service";
pub const PARAM_OPERATION: &str = "Operation";
pub const PARAM_ACCESS_KEY_ID: &str = "AWSAccessKeyId";
pub const PARAM_ASSOCIATE_TAG: &str = "AssociateTag";
pub const PARAM_TIMESTAMP: &str = "Timestamp";
pub const PARAM_SIGNATURE: &str = "Signature";
pub const PARAM_ITEM_ID: &str = "ItemId";
pub const PARAM_ID_TYPE: &str = "IdType";
pub const PARAM_RESPONSE_GROUP: &str = "ResponseGroup";
pub const PARAM_VARIATION_PAGE: &str = "VariationPage";
pub const PARAM_SEARCH_INDEX: &str = "SearchIndex";
