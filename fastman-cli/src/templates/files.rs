//! Template file contents
//!
//! Placeholders: `{{module_name}}`, `{{class_name}}`, `{{plural_name}}`.
//! Python f-string fields are single braces, so `{{{module_name}}_id}`
//! renders as `{order_id}`.

/// SQLAlchemy model template (`models.py`)
pub const MODELS_PY: &str = r#"from datetime import datetime
from typing import Optional
from sqlalchemy.orm import Mapped, mapped_column
from sqlalchemy import String, Text, DateTime
from app.core.database import Base


class {{class_name}}(Base):
    """{{class_name}} model for storing {{module_name}} information."""

    __tablename__ = "{{plural_name}}"

    id: Mapped[int] = mapped_column(primary_key=True, index=True)
    name: Mapped[str] = mapped_column(String(255), nullable=False, unique=True, index=True)
    description: Mapped[Optional[str]] = mapped_column(Text, nullable=True)
    is_active: Mapped[bool] = mapped_column(default=True, nullable=False)
    created_at: Mapped[datetime] = mapped_column(
        DateTime,
        default=datetime.utcnow,
        nullable=False
    )
    updated_at: Mapped[datetime] = mapped_column(
        DateTime,
        default=datetime.utcnow,
        onupdate=datetime.utcnow,
        nullable=False
    )

    def __repr__(self) -> str:
        return f"<{{class_name}} id={self.id} name={self.name!r}>"
"#;

/// Pydantic schema template (`schemas.py`)
pub const SCHEMAS_PY: &str = r#"from datetime import datetime
from typing import Optional
from pydantic import BaseModel, ConfigDict, Field


class {{class_name}}Base(BaseModel):
    """Base {{class_name}} schema with common fields."""

    name: str = Field(..., min_length=1, max_length=255, description="{{class_name}} name")
    description: Optional[str] = Field(None, max_length=1000, description="{{class_name}} description")
    is_active: bool = Field(True, description="Whether the {{module_name}} is active")


class {{class_name}}Create({{class_name}}Base):
    """Schema for creating a new {{module_name}}."""
    pass


class {{class_name}}Update(BaseModel):
    """Schema for updating an existing {{module_name}}."""

    name: Optional[str] = Field(None, min_length=1, max_length=255)
    description: Optional[str] = Field(None, max_length=1000)
    is_active: Optional[bool] = None


class {{class_name}}({{class_name}}Base):
    """Schema for {{module_name}} response with all fields."""

    id: int
    created_at: datetime
    updated_at: datetime

    model_config = ConfigDict(from_attributes=True)


class {{class_name}}InDB({{class_name}}):
    """Schema for {{module_name}} as stored in database."""
    pass
"#;

/// Data-access template (`crud.py`)
pub const CRUD_PY: &str = r#"from typing import List, Optional
from sqlalchemy import select
from sqlalchemy.ext.asyncio import AsyncSession
from app.core.crud import CRUDBase
from .models import {{class_name}} as {{class_name}}Model
from .schemas import {{class_name}}Create, {{class_name}}Update


class {{class_name}}CRUD(CRUDBase[{{class_name}}Model, {{class_name}}Create, {{class_name}}Update]):
    """CRUD operations for {{class_name}} model."""

    def __init__(self):
        super().__init__({{class_name}}Model)

    async def get_by_name(
        self, session: AsyncSession, name: str
    ) -> Optional[{{class_name}}Model]:
        """Get a {{module_name}} by its unique name."""
        result = await session.execute(
            select({{class_name}}Model).where({{class_name}}Model.name == name)
        )
        return result.scalar_one_or_none()

    async def get_active(
        self, session: AsyncSession, *, skip: int = 0, limit: int = 100
    ) -> List[{{class_name}}Model]:
        """Get active {{plural_name}} only."""
        result = await session.execute(
            select({{class_name}}Model)
            .where({{class_name}}Model.is_active.is_(True))
            .offset(skip)
            .limit(limit)
        )
        return list(result.scalars().all())

    async def deactivate(
        self, session: AsyncSession, *, db_obj: {{class_name}}Model
    ) -> {{class_name}}Model:
        """Soft delete a {{module_name}} by clearing its active flag."""
        return await self.update(session, db_obj=db_obj, obj_in={"is_active": False})


# Create a singleton instance
{{module_name}}_crud = {{class_name}}CRUD()
"#;

/// Service layer template (`services.py`)
pub const SERVICES_PY: &str = r#"from typing import List
from sqlalchemy.ext.asyncio import AsyncSession
from app.core.logging import get_logger
from .models import {{class_name}} as {{class_name}}Model
from .schemas import {{class_name}}Create, {{class_name}}Update
from .crud import {{module_name}}_crud
from .exceptions import {{class_name}}NotFoundError, {{class_name}}AlreadyExistsError

# Configure logging
logger = get_logger(__name__)


class {{class_name}}Service:
    """Service layer for {{module_name}} business logic."""

    @staticmethod
    async def get_all_{{plural_name}}(
        session: AsyncSession,
        skip: int = 0,
        limit: int = 100,
        active_only: bool = False
    ) -> List[{{class_name}}Model]:
        """Get all {{plural_name}} with pagination."""
        if active_only:
            return await {{module_name}}_crud.get_active(session, skip=skip, limit=limit)
        return await {{module_name}}_crud.get_multi(session, skip=skip, limit=limit)

    @staticmethod
    async def get_{{module_name}}_by_id(
        session: AsyncSession,
        {{module_name}}_id: int
    ) -> {{class_name}}Model:
        """Get a {{module_name}} by ID."""
        {{module_name}} = await {{module_name}}_crud.get(session, {{module_name}}_id)
        if not {{module_name}}:
            logger.warning(f"{{class_name}} not found: {{{module_name}}_id}")
            raise {{class_name}}NotFoundError({{module_name}}_id)
        return {{module_name}}

    @staticmethod
    async def get_{{module_name}}_by_name(
        session: AsyncSession,
        name: str
    ) -> {{class_name}}Model:
        """Get a {{module_name}} by name."""
        {{module_name}} = await {{module_name}}_crud.get_by_name(session, name)
        if not {{module_name}}:
            logger.warning(f"{{class_name}} not found: {name}")
            raise {{class_name}}NotFoundError(name)
        return {{module_name}}

    @staticmethod
    async def create_{{module_name}}(
        session: AsyncSession,
        {{module_name}}_data: {{class_name}}Create
    ) -> {{class_name}}Model:
        """Create a new {{module_name}}."""
        existing = await {{module_name}}_crud.get_by_name(session, {{module_name}}_data.name)
        if existing:
            raise {{class_name}}AlreadyExistsError({{module_name}}_data.name)

        logger.info("Creating {{module_name}}")
        {{module_name}} = await {{module_name}}_crud.create(session, obj_in={{module_name}}_data)
        logger.info(f"{{class_name}} created successfully: {{{module_name}}.id}")
        return {{module_name}}

    @staticmethod
    async def update_{{module_name}}(
        session: AsyncSession,
        {{module_name}}_id: int,
        {{module_name}}_data: {{class_name}}Update
    ) -> {{class_name}}Model:
        """Update an existing {{module_name}}."""
        {{module_name}} = await {{class_name}}Service.get_{{module_name}}_by_id(session, {{module_name}}_id)

        logger.info(f"Updating {{module_name}}: {{{module_name}}_id}")
        updated_{{module_name}} = await {{module_name}}_crud.update(
            session,
            db_obj={{module_name}},
            obj_in={{module_name}}_data
        )
        logger.info(f"{{class_name}} updated successfully: {{{module_name}}_id}")
        return updated_{{module_name}}

    @staticmethod
    async def delete_{{module_name}}(
        session: AsyncSession,
        {{module_name}}_id: int,
        hard: bool = False
    ) -> None:
        """Delete a {{module_name}} (soft delete unless hard is set)."""
        {{module_name}} = await {{class_name}}Service.get_{{module_name}}_by_id(session, {{module_name}}_id)

        logger.info(f"Deleting {{module_name}}: {{{module_name}}_id} (hard={hard})")
        if hard:
            await {{module_name}}_crud.remove(session, id={{module_name}}_id)
        else:
            await {{module_name}}_crud.deactivate(session, db_obj={{module_name}})
        logger.info(f"{{class_name}} deleted successfully: {{{module_name}}_id}")
"#;

/// API route template (`routes.py`)
pub const ROUTES_PY: &str = r#"from fastapi import APIRouter, Depends, status, Query, Path
from sqlalchemy.ext.asyncio import AsyncSession
from typing import List
from app.core.database import get_session
from app.core.logging import get_logger
from .schemas import {{class_name}}, {{class_name}}Create, {{class_name}}Update
from .services import {{class_name}}Service
from .exceptions import {{class_name}}Exception

# Configure logging
logger = get_logger(__name__)

router = APIRouter(prefix="/{{plural_name}}", tags=["{{class_name}}"])


@router.get("/", response_model=List[{{class_name}}])
async def get_all_{{plural_name}}(
    skip: int = Query(0, ge=0, description="Number of {{plural_name}} to skip"),
    limit: int = Query(100, ge=1, le=1000, description="Number of {{plural_name}} to return"),
    active_only: bool = Query(False, description="Only return active {{plural_name}}"),
    session: AsyncSession = Depends(get_session)
):
    """Get all {{plural_name}} with pagination."""
    try:
        return await {{class_name}}Service.get_all_{{plural_name}}(
            session,
            skip,
            limit,
            active_only
        )
    except {{class_name}}Exception as e:
        logger.error(f"Error getting {{plural_name}}: {e}")
        raise


@router.get("/name/{name}", response_model={{class_name}})
async def get_{{module_name}}_by_name(
    name: str = Path(..., description="{{class_name}} name"),
    session: AsyncSession = Depends(get_session)
):
    """Get a specific {{module_name}} by name."""
    try:
        return await {{class_name}}Service.get_{{module_name}}_by_name(session, name)
    except {{class_name}}Exception as e:
        logger.error(f"Error getting {{module_name}} by name {name}: {e}")
        raise


@router.get("/{{{module_name}}_id}", response_model={{class_name}})
async def get_{{module_name}}(
    {{module_name}}_id: int = Path(..., description="{{class_name}} ID"),
    session: AsyncSession = Depends(get_session)
):
    """Get a specific {{module_name}} by ID."""
    try:
        return await {{class_name}}Service.get_{{module_name}}_by_id(session, {{module_name}}_id)
    except {{class_name}}Exception as e:
        logger.error(f"Error getting {{module_name}} {{{module_name}}_id}: {e}")
        raise


@router.post("/", response_model={{class_name}}, status_code=status.HTTP_201_CREATED)
async def create_{{module_name}}(
    {{module_name}}_data: {{class_name}}Create,
    session: AsyncSession = Depends(get_session)
):
    """Create a new {{module_name}}."""
    try:
        return await {{class_name}}Service.create_{{module_name}}(session, {{module_name}}_data)
    except {{class_name}}Exception as e:
        logger.error(f"Error creating {{module_name}}: {e}")
        raise


@router.put("/{{{module_name}}_id}", response_model={{class_name}})
async def update_{{module_name}}(
    {{module_name}}_data: {{class_name}}Update,
    {{module_name}}_id: int = Path(..., description="{{class_name}} ID"),
    session: AsyncSession = Depends(get_session)
):
    """Update an existing {{module_name}}."""
    try:
        return await {{class_name}}Service.update_{{module_name}}(
            session,
            {{module_name}}_id,
            {{module_name}}_data
        )
    except {{class_name}}Exception as e:
        logger.error(f"Error updating {{module_name}} {{{module_name}}_id}: {e}")
        raise


@router.delete("/{{{module_name}}_id}", status_code=status.HTTP_204_NO_CONTENT)
async def delete_{{module_name}}(
    {{module_name}}_id: int = Path(..., description="{{class_name}} ID"),
    hard: bool = Query(False, description="Permanently remove instead of deactivating"),
    session: AsyncSession = Depends(get_session)
):
    """Delete a {{module_name}}."""
    try:
        await {{class_name}}Service.delete_{{module_name}}(session, {{module_name}}_id, hard)
    except {{class_name}}Exception as e:
        logger.error(f"Error deleting {{module_name}} {{{module_name}}_id}: {e}")
        raise
"#;

/// Exception types template (`exceptions.py`)
pub const EXCEPTIONS_PY: &str = r#""""
Custom exceptions for the {{module_name}} module.

These exceptions provide specific error types for business logic violations.
"""


class {{class_name}}Exception(Exception):
    """Base exception for all {{module_name}}-related errors."""
    pass


class {{class_name}}NotFoundError({{class_name}}Exception):
    """Raised when a {{module_name}} is not found."""

    def __init__(self, identifier):
        self.identifier = identifier
        super().__init__(f"{{class_name}} with identifier '{identifier}' not found")


class {{class_name}}AlreadyExistsError({{class_name}}Exception):
    """Raised when attempting to create a {{module_name}} that already exists."""

    def __init__(self, name: str):
        self.name = name
        super().__init__(f"{{class_name}} with name '{name}' already exists")


class Invalid{{class_name}}DataError({{class_name}}Exception):
    """Raised when {{module_name}} data is invalid."""

    def __init__(self, message: str):
        super().__init__(f"Invalid {{module_name}} data: {message}")
"#;

/// Package manifest template (`__init__.py`)
pub const INIT_PY: &str = r#""""
{{class_name}} module for managing {{module_name}}-related operations.

This module provides a complete CRUD implementation for {{plural_name}},
including models, schemas, services, and API routes.
"""

from .models import {{class_name}}
from .schemas import (
    {{class_name}}Base,
    {{class_name}}Create,
    {{class_name}}Update,
    {{class_name}} as {{class_name}}Schema,
    {{class_name}}InDB,
)
from .routes import router
from .services import {{class_name}}Service
from .crud import {{module_name}}_crud
from .exceptions import (
    {{class_name}}Exception,
    {{class_name}}NotFoundError,
    {{class_name}}AlreadyExistsError,
    Invalid{{class_name}}DataError,
)

__all__ = [
    "{{class_name}}",
    "{{class_name}}Base",
    "{{class_name}}Create",
    "{{class_name}}Update",
    "{{class_name}}Schema",
    "{{class_name}}InDB",
    "router",
    "{{class_name}}Service",
    "{{module_name}}_crud",
    "{{class_name}}Exception",
    "{{class_name}}NotFoundError",
    "{{class_name}}AlreadyExistsError",
    "Invalid{{class_name}}DataError",
]
"#;

/// Module documentation template (`README.md`)
pub const README_MD: &str = r#"# {{class_name}} Module

## Overview

The {{class_name}} module provides a complete CRUD implementation for managing {{plural_name}} in the FastAPI application.

## Structure

```
{{module_name}}/
├── __init__.py         # Module exports
├── models.py           # SQLAlchemy models
├── schemas.py          # Pydantic schemas
├── crud.py             # CRUD operations
├── services.py         # Business logic
├── routes.py           # API endpoints
├── exceptions.py       # Custom exceptions
└── README.md           # This file
```

## Components

### Models (`models.py`)
SQLAlchemy model defining the `{{plural_name}}` table.

**Fields:**
- `id`: Primary key
- `name`: {{class_name}} name (required, unique, indexed)
- `description`: Optional description
- `is_active`: Active status (default: True)
- `created_at`: Creation timestamp
- `updated_at`: Last update timestamp

### Schemas (`schemas.py`)
Pydantic schemas for request/response validation:
- `{{class_name}}Base`: Base schema with common fields
- `{{class_name}}Create`: Schema for creating {{plural_name}}
- `{{class_name}}Update`: Schema for updating {{plural_name}}
- `{{class_name}}`: Response schema with all fields
- `{{class_name}}InDB`: Database representation

### CRUD (`crud.py`)
Database operations extending `CRUDBase`:
- `get()`: Get {{module_name}} by ID
- `get_multi()`: Get multiple {{plural_name}} with pagination
- `get_by_name()`: Get {{module_name}} by name
- `get_active()`: Get active {{plural_name}} only
- `create()`: Create new {{module_name}}
- `update()`: Update existing {{module_name}}
- `deactivate()`: Soft delete (set is_active=False)
- `remove()`: Hard delete from database

### Services (`services.py`)
Business logic layer:
- `get_all_{{plural_name}}()`: Get all {{plural_name}} with filtering
- `get_{{module_name}}_by_id()`: Get specific {{module_name}}
- `get_{{module_name}}_by_name()`: Get by name
- `create_{{module_name}}()`: Create with duplicate-name check
- `update_{{module_name}}()`: Update existing {{module_name}}
- `delete_{{module_name}}()`: Delete (soft by default, hard on request)

### Routes (`routes.py`)
FastAPI endpoints:
- `GET /{{plural_name}}/`: List all {{plural_name}}
- `GET /{{plural_name}}/{{{module_name}}_id}`: Get specific {{module_name}}
- `GET /{{plural_name}}/name/{name}`: Get by name
- `POST /{{plural_name}}/`: Create new {{module_name}}
- `PUT /{{plural_name}}/{{{module_name}}_id}`: Update {{module_name}}
- `DELETE /{{plural_name}}/{{{module_name}}_id}`: Delete {{module_name}}

### Exceptions (`exceptions.py`)
Custom exceptions:
- `{{class_name}}Exception`: Base exception
- `{{class_name}}NotFoundError`: {{class_name}} not found
- `{{class_name}}AlreadyExistsError`: Duplicate name
- `Invalid{{class_name}}DataError`: Invalid data

## Usage

### Import the module
```python
from app.{{module_name}} import router, {{class_name}}Service
```

### Register routes
```python
# In app/apis/v1.py
from app.{{module_name}}.routes import router as {{module_name}}_router

router = APIRouter(prefix="/v1")
router.include_router({{module_name}}_router)
```

### Use in code
```python
from app.{{module_name}}.services import {{class_name}}Service
from app.{{module_name}}.schemas import {{class_name}}Create

{{module_name}}_data = {{class_name}}Create(
    name="Example {{class_name}}",
    description="This is an example"
)
{{module_name}} = await {{class_name}}Service.create_{{module_name}}(session, {{module_name}}_data)
```

## Database Migration

After creating this module, generate and run migrations:

```bash
alembic revision --autogenerate -m "Add {{module_name}} table"
alembic upgrade head
```

## Testing

Create tests in `tests/test_{{module_name}}.py`:

```python
import pytest
from app.{{module_name}}.schemas import {{class_name}}Create


@pytest.mark.asyncio
async def test_create_{{module_name}}(session):
    pass
```

## API Documentation

Once the server is running, visit:
- Swagger UI: http://localhost:8000/docs
- ReDoc: http://localhost:8000/redoc

Look for the "{{class_name}}" tag to see all endpoints.
"#;
